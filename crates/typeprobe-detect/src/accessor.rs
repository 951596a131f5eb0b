use typeprobe_meta::{ClassDescriptor, MethodDescriptor};

/// First public, parameterless method of `class` whose name contains
/// `marker` and, ignoring case, `field_name`.
///
/// Methods are visited in the order the class lists them. Only methods the
/// class itself declares are candidates; getters inherited from a parent or
/// contributed by a mixin module are not.
pub fn find_accessor<'c>(
    class: &'c ClassDescriptor,
    field_name: &str,
    marker: &str,
) -> Option<&'c MethodDescriptor> {
    let field_name = field_name.to_lowercase();
    class.public_methods().find(|method| {
        method.parameter_count == 0
            && method.name.contains(marker)
            && method.name.to_lowercase().contains(&field_name)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class() -> ClassDescriptor {
        ClassDescriptor::new("App.Order")
            .with_method(MethodDescriptor::new("setTotal", 1))
            .with_method(MethodDescriptor::new("getTotal", 1).returning("float", false))
            .with_method(MethodDescriptor::new("computeTotal", 0).returning("int", false))
            .with_method(MethodDescriptor::new("getTotalAmount", 0).returning("int", false))
            .with_method(MethodDescriptor::new("getTOTAL", 0).returning("string", false))
            .with_method(MethodDescriptor::new("getSecret", 0).private())
    }

    #[test]
    fn test_first_matching_accessor_in_declaration_order() {
        let class = class();
        let accessor = find_accessor(&class, "total", "get").unwrap();
        assert_eq!(accessor.name, "getTotalAmount");
    }

    #[test]
    fn test_field_name_is_case_insensitive() {
        let class = class();
        assert_eq!(find_accessor(&class, "TotalAmount", "get").unwrap().name, "getTotalAmount");
    }

    #[test]
    fn test_private_and_parameterized_methods_ignored() {
        let class = class();
        assert!(find_accessor(&class, "secret", "get").is_none());
        assert!(find_accessor(&class, "missing", "get").is_none());
    }

    #[test]
    fn test_marker_is_case_sensitive() {
        let class = ClassDescriptor::new("App.X")
            .with_method(MethodDescriptor::new("GetName", 0).returning("string", false));
        assert!(find_accessor(&class, "name", "get").is_none());
        assert!(find_accessor(&class, "name", "Get").is_some());
    }
}
