use serde::Serialize;

/// Static content record for one week of the curriculum.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Handout {
    pub week: u8,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub sections: &'static [HandoutSection],
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HandoutSection {
    pub heading: &'static str,
    pub points: &'static [&'static str],
}

impl Handout {
    pub fn document_title(&self) -> String {
        format!("Week {}: {}", self.week, self.title)
    }

    pub fn pdf_file_name(&self) -> String {
        format!("word-week-{}-handout.pdf", self.week)
    }
}
