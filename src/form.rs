use crate::api::models::{Person, PersonPayload};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

// Loose shape check only; the backend owns uniqueness and real validation
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Age must be a positive number")]
    InvalidAge,
}

/// Transient modal form state. Everything is a string while the user is
/// typing; `validate` turns it into a well-formed payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonForm {
    pub name: String,
    pub age: String,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub telephone: String,
    pub poste: String,
    pub departement: String,
    pub date_embauche: String,
}

impl PersonForm {
    /// Fill the form from an existing record for edit mode
    pub fn from_person(person: &Person) -> Self {
        Self {
            name: person.name.clone(),
            age: person.age.to_string(),
            nom: person.nom.clone(),
            prenom: person.prenom.clone(),
            email: person.email.clone(),
            telephone: person.telephone.clone(),
            poste: person.poste.clone(),
            departement: person.departement.clone(),
            date_embauche: person.date_embauche.clone(),
        }
    }

    /// Check required fields, the email shape, and the age, in that order.
    /// On success all fields are trimmed and age is coerced to an integer.
    /// Runs before any network call.
    pub fn validate(&self) -> Result<PersonPayload, FormError> {
        let required = [
            ("Name", &self.name),
            ("Age", &self.age),
            ("Nom", &self.nom),
            ("Prenom", &self.prenom),
            ("Email", &self.email),
        ];
        for (label, value) in required {
            if value.trim().is_empty() {
                return Err(FormError::Missing(label));
            }
        }

        let email = self.email.trim();
        if !EMAIL_PATTERN.is_match(email) {
            return Err(FormError::InvalidEmail);
        }

        let age = self
            .age
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|age| *age > 0)
            .ok_or(FormError::InvalidAge)?;

        Ok(PersonPayload {
            name: self.name.trim().to_string(),
            nom: self.nom.trim().to_string(),
            prenom: self.prenom.trim().to_string(),
            age,
            email: email.to_string(),
            telephone: self.telephone.trim().to_string(),
            poste: self.poste.trim().to_string(),
            departement: self.departement.trim().to_string(),
            date_embauche: self.date_embauche.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> PersonForm {
        PersonForm {
            name: "Jo".to_string(),
            age: "30".to_string(),
            nom: "Doe".to_string(),
            prenom: "Jo".to_string(),
            email: "jo@x.com".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_form_builds_payload() {
        let payload = filled_form().validate().expect("form should validate");
        assert_eq!(payload.name, "Jo");
        assert_eq!(payload.age, 30);
        assert_eq!(payload.email, "jo@x.com");
        assert_eq!(payload.telephone, "");
        assert_eq!(payload.departement, "");
        assert_eq!(payload.date_embauche, "");
    }

    #[test]
    fn test_missing_name_fails_first() {
        let form = PersonForm {
            name: "   ".to_string(),
            ..filled_form()
        };
        let err = form.validate().unwrap_err();
        assert_eq!(err, FormError::Missing("Name"));
        assert_eq!(err.to_string(), "Name is required");
    }

    #[test]
    fn test_required_fields_checked_in_declared_order() {
        let mut form = PersonForm::default();
        assert_eq!(form.validate().unwrap_err(), FormError::Missing("Name"));
        form.name = "Jo".to_string();
        assert_eq!(form.validate().unwrap_err(), FormError::Missing("Age"));
        form.age = "30".to_string();
        assert_eq!(form.validate().unwrap_err(), FormError::Missing("Nom"));
        form.nom = "Doe".to_string();
        assert_eq!(form.validate().unwrap_err(), FormError::Missing("Prenom"));
        form.prenom = "Jo".to_string();
        assert_eq!(form.validate().unwrap_err(), FormError::Missing("Email"));
    }

    #[test]
    fn test_email_shapes() {
        let mut form = filled_form();
        form.email = "not-an-email".to_string();
        assert_eq!(form.validate().unwrap_err(), FormError::InvalidEmail);

        form.email = "a@b.co".to_string();
        assert!(form.validate().is_ok());

        form.email = "a b@c.co".to_string();
        assert_eq!(form.validate().unwrap_err(), FormError::InvalidEmail);
    }

    #[test]
    fn test_age_must_be_a_positive_integer() {
        let mut form = filled_form();
        for bad in ["0", "-5", "abc", "3.5"] {
            form.age = bad.to_string();
            assert_eq!(
                form.validate().unwrap_err(),
                FormError::InvalidAge,
                "age {bad:?} should be rejected"
            );
        }

        for (good, expected) in [("1", 1), ("42", 42)] {
            form.age = good.to_string();
            assert_eq!(form.validate().unwrap().age, expected);
        }
    }

    #[test]
    fn test_string_fields_are_trimmed() {
        let form = PersonForm {
            name: "  Jo  ".to_string(),
            nom: " Doe ".to_string(),
            email: " jo@x.com ".to_string(),
            telephone: " 555-0101 ".to_string(),
            ..filled_form()
        };
        let payload = form.validate().unwrap();
        assert_eq!(payload.name, "Jo");
        assert_eq!(payload.nom, "Doe");
        assert_eq!(payload.email, "jo@x.com");
        assert_eq!(payload.telephone, "555-0101");
    }

    #[test]
    fn test_from_person_stringifies_age() {
        let person = Person {
            id: Some(3),
            name: "Jo".to_string(),
            nom: "Doe".to_string(),
            prenom: "Jo".to_string(),
            age: 30,
            email: "jo@x.com".to_string(),
            telephone: String::new(),
            poste: "Dev".to_string(),
            departement: "IT".to_string(),
            date_embauche: "2024-01-15".to_string(),
        };
        let form = PersonForm::from_person(&person);
        assert_eq!(form.age, "30");
        assert_eq!(form.poste, "Dev");
        assert_eq!(form.date_embauche, "2024-01-15");
    }
}
