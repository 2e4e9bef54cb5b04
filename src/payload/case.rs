//! camelCase <-> snake_case key conversion

/// `postalCode` -> `postal_code`
pub fn camel_to_snake(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, c) in key.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// `postal_code` -> `postalCode`
pub fn snake_to_camel(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper_next = false;
    for c in key.chars() {
        if c == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_camel_to_snake() {
        assert_eq!(camel_to_snake("postalCode"), "postal_code");
        assert_eq!(camel_to_snake("doctorId"), "doctor_id");
        assert_eq!(camel_to_snake("email"), "email");
        assert_eq!(camel_to_snake("Email"), "email");
    }

    #[test]
    fn test_snake_to_camel() {
        assert_eq!(snake_to_camel("postal_code"), "postalCode");
        assert_eq!(snake_to_camel("phone_extension"), "phoneExtension");
        assert_eq!(snake_to_camel("city"), "city");
        assert_eq!(snake_to_camel("_private"), "private");
    }

    #[test]
    fn test_field_names_survive_both_directions() {
        for name in ["firstName", "birthDate", "medicalId", "acceptTerms"] {
            assert_eq!(snake_to_camel(&camel_to_snake(name)), name);
        }
    }
}
