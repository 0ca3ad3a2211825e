//! Canonical type signatures.
//!
//! A record type is identified by the hash of its canonical signature: the
//! type's own rendering followed by every type it transitively references,
//! in ascending lexicographic order. For example
//!
//! ```text
//! Wallet(address owner,Asset[] assets)Asset(string name,uint256 amount)
//! ```
//!
//! **CRITICAL**: This rendering is FROZEN. Changing it changes every digest.

use std::collections::BTreeSet;

use crate::crypto::Sha256Hash;
use crate::types::{base_type, TypeDictionary};

/// Every declared type reachable from `primary_type`, including itself.
///
/// Undeclared (primitive or unknown) names contribute nothing. Cyclic
/// declarations terminate: a type already in the visited set is skipped.
pub fn resolve_dependencies(primary_type: &str, types: &TypeDictionary) -> BTreeSet<String> {
    let mut visited = BTreeSet::new();
    collect_dependencies(primary_type, types, &mut visited);
    visited
}

fn collect_dependencies(type_name: &str, types: &TypeDictionary, visited: &mut BTreeSet<String>) {
    if visited.contains(type_name) {
        return;
    }
    let Some(members) = types.get(type_name) else {
        return;
    };
    visited.insert(type_name.to_string());
    for member in members {
        collect_dependencies(base_type(&member.type_name), types, visited);
    }
}

/// Render the canonical signature of `primary_type`.
pub fn encode_type(primary_type: &str, types: &TypeDictionary) -> String {
    let mut deps = resolve_dependencies(primary_type, types);
    deps.remove(primary_type);

    let mut out = String::new();
    render_type(&mut out, primary_type, types);
    // BTreeSet iterates in ascending byte order
    for dep in &deps {
        render_type(&mut out, dep, types);
    }
    out
}

/// `Name(type1 field1,type2 field2)`, members in declared order.
fn render_type(out: &mut String, type_name: &str, types: &TypeDictionary) {
    out.push_str(type_name);
    out.push('(');
    if let Some(members) = types.get(type_name) {
        for (i, member) in members.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str(&member.type_name);
            out.push(' ');
            out.push_str(&member.name);
        }
    }
    out.push(')');
}

/// The type-identifier hash: SHA-256 of the canonical signature.
pub fn type_hash(primary_type: &str, types: &TypeDictionary) -> Sha256Hash {
    Sha256Hash::hash(encode_type(primary_type, types).as_bytes())
}
