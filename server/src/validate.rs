use actix_web::web::Json;
use validator::Validate;

use errors::Error;

pub fn validate<T>(params: &Json<T>) -> Result<(), Error>
where
    T: Validate,
{
    params.validate().map_err(|err| {
        let mut fields: Vec<&str> = err.field_errors().keys().copied().collect();
        fields.sort_unstable();
        debug!("Rejected request body - invalid fields: {:?}", fields);
        Error::UnprocessableEntity(format!("Invalid fields: {}", fields.join(", ")))
    })
}

#[cfg(test)]
mod tests {
    use actix_web::web::Json;
    use validator::Validate;

    use errors::Error;

    use super::validate;

    #[derive(Validate)]
    struct Answer {
        #[validate(length(min = 1))]
        text: String,
        #[validate(required)]
        points: Option<i32>,
    }

    #[test]
    fn test_validate_names_invalid_fields() {
        let params = Json(Answer {
            text: String::new(),
            points: None,
        });
        assert_eq!(
            validate(&params),
            Err(Error::UnprocessableEntity("Invalid fields: points, text".into()))
        );
    }

    #[test]
    fn test_validate_accepts_valid_body() {
        let params = Json(Answer {
            text: "Diamond".into(),
            points: Some(2),
        });
        assert_eq!(validate(&params), Ok(()));
    }
}
