use crate::models::domain::ChapterInfo;

/// Question banks shipped with the quiz, as (file name, chapter name).
pub const DEFAULT_CHAPTER_FILES: &[(&str, &str)] = &[
    ("8_software_design.json", "8. Software Design"),
    ("9_UX_UI.json", "9. UX/UI"),
    ("10_Software_Testing.json", "10. Software Testing"),
    (
        "11_Software_Development_Standard.json",
        "11. Software Development Standard",
    ),
    (
        "12_Software_cost_estimation.json",
        "12. Software Cost Estimation",
    ),
    ("13_Quality_Management.json", "13. Quality Management"),
    ("14_Software_Maintenance.json", "14. Software Maintenance"),
    ("15_CMS.json", "15. CMS"),
];

pub fn default_chapters() -> Vec<ChapterInfo> {
    DEFAULT_CHAPTER_FILES
        .iter()
        .map(|(file_name, chapter_name)| ChapterInfo::new(file_name, chapter_name))
        .collect()
}
