use validator::ValidationErrors;

/// Field names that failed validation, sorted so messages stay stable.
pub fn format_validation_errors(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<String> = errors.errors().keys().map(|k| k.to_string()).collect();
    fields.sort();
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(email)]
        email: String,
        #[validate(length(min = 1))]
        name: String,
    }

    #[test]
    fn lists_every_failing_field_in_order() {
        let probe = Probe {
            email: "nope".to_string(),
            name: String::new(),
        };

        let errors = probe.validate().unwrap_err();

        assert_eq!(format_validation_errors(&errors), vec!["email", "name"]);
    }
}
