//! Course fixture builder

use gittraining_core::course::RawCourse;

/// Builds the JSON text of a course file, starting from a complete
/// fixture so tests only state what they change.
#[derive(Debug, Clone)]
pub struct CourseFileBuilder {
    raw: RawCourse,
}

impl Default for CourseFileBuilder {
    fn default() -> Self {
        Self {
            raw: RawCourse {
                title: Some("Git Training".to_string()),
                organisation: Some("training-demo-for-phil".to_string()),
                root_owner: Some("phil-rice".to_string()),
                root_repo: Some("javaoptics".to_string()),
                token: Some("tok123".to_string()),
                email_file: Some("emails.csv".to_string()),
            },
        }
    }
}

impl CourseFileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn organisation(mut self, organisation: &str) -> Self {
        self.raw.organisation = Some(organisation.to_string());
        self
    }

    pub fn token(mut self, token: &str) -> Self {
        self.raw.token = Some(token.to_string());
        self
    }

    pub fn email_file(mut self, email_file: &str) -> Self {
        self.raw.email_file = Some(email_file.to_string());
        self
    }

    /// Drop a field by its on-disk name, to provoke validation errors.
    pub fn without(mut self, field: &str) -> Self {
        match field {
            "title" => self.raw.title = None,
            "organisation" => self.raw.organisation = None,
            "rootOwner" => self.raw.root_owner = None,
            "rootRepo" => self.raw.root_repo = None,
            "token" => self.raw.token = None,
            "emailFile" => self.raw.email_file = None,
            other => panic!("unknown course field {other}"),
        }
        self
    }

    pub fn build(&self) -> String {
        serde_json::to_string_pretty(&self.raw).unwrap()
    }
}
