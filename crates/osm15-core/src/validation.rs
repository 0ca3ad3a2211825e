//! Schema validation: every type reachable from the primary type must resolve.

use crate::canonical::resolve_dependencies;
use crate::error::SchemaError;
use crate::types::{base_type, classify, TypeClass, TypeDictionary};

/// Validate a primary type against a (working) dictionary.
///
/// This performs:
/// - Primary type check (must be declared)
/// - Reference check (every member type of every reachable record is a
///   known primitive or a declared type, after stripping `[]` suffixes)
pub fn validate_schema(primary_type: &str, types: &TypeDictionary) -> Result<(), SchemaError> {
    if !types.contains_key(primary_type) {
        return Err(SchemaError::UnknownPrimaryType(primary_type.to_string()));
    }

    for owner in resolve_dependencies(primary_type, types) {
        // Reachable types are always declared
        let Some(members) = types.get(&owner) else {
            continue;
        };
        for member in members {
            let element = base_type(&member.type_name);
            if classify(element, types) == TypeClass::Unknown {
                return Err(SchemaError::UnknownType {
                    owner: owner.clone(),
                    field: member.name.clone(),
                    missing: element.to_string(),
                });
            }
        }
    }

    Ok(())
}
