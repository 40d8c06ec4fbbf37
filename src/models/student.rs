use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::AppError;

use super::check_max_length;

pub const FIRST_NAME_MAX_LEN: usize = 100;
pub const LAST_NAME_MAX_LEN: usize = 255;
pub const EMAIL_MAX_LEN: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: i32,
    pub national_id: i64,
    pub course_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: i32,
    pub national_id: i64,
    pub course_id: i64,
}

impl StudentRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        check_max_length("firstName", &self.first_name, FIRST_NAME_MAX_LEN)?;
        check_max_length("lastName", &self.last_name, LAST_NAME_MAX_LEN)?;
        check_max_length("email", &self.email, EMAIL_MAX_LEN)?;
        Ok(())
    }

    pub fn into_student(self, id: i64) -> Student {
        Student {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            age: self.age,
            national_id: self.national_id,
            course_id: self.course_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_body() {
        let req: StudentRequest = serde_json::from_str(
            r#"{"firstName":"Ana","lastName":"Lima","email":"a@x.com","age":20,"nationalId":12345678901,"courseId":1}"#,
        )
        .expect("valid student json");
        assert_eq!(req.first_name, "Ana");
        assert_eq!(req.national_id, 12_345_678_901);
        assert_eq!(req.course_id, 1);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn missing_course_id_fails_to_parse() {
        let res = serde_json::from_str::<StudentRequest>(
            r#"{"firstName":"Ana","lastName":"Lima","email":"a@x.com","age":20,"nationalId":1}"#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let req = StudentRequest {
            first_name: "é".repeat(FIRST_NAME_MAX_LEN),
            last_name: "Lima".to_string(),
            email: "a@x.com".to_string(),
            age: 20,
            national_id: 1,
            course_id: 1,
        };
        assert!(req.validate().is_ok());

        let too_long = StudentRequest {
            email: "x".repeat(EMAIL_MAX_LEN + 1),
            ..req
        };
        assert!(matches!(too_long.validate(), Err(AppError::BadRequest(_))));
    }
}
