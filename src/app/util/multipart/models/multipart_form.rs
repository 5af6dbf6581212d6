use std::collections::HashMap;

use super::file_properties::FileProperties;

#[derive(Debug, Default)]
pub struct MultipartForm {
    pub files: Vec<FileProperties>,
    pub fields: HashMap<String, String>,
}

impl MultipartForm {
    pub fn file(&self, field_name: &str) -> Option<&FileProperties> {
        self.files
            .iter()
            .find(|f| f.field_name == field_name)
            .or_else(|| self.files.first())
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(|s| s.as_str())
    }
}
