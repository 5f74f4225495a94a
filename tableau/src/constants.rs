use crate::terminal::StyleId;

pub(crate) const ASCII_ART: &str = r#"
    ┌───┬───┬───┐
    │ a │ a │ a │   t a b l e a u
    ├───┼───┼───┤
    │ a │ b1│ c1│   chasing dependencies
    └───┴───┴───┘
"#;
pub(crate) const INTERMEDIATE_SUFFIX: &str = "_intermediate_";

pub(crate) const STYLE_LOGO: StyleId = 0;
pub(crate) const STYLE_INFO: StyleId = 1;
pub(crate) const STYLE_RELATION: StyleId = 2;
pub(crate) const STYLE_TABLE: StyleId = 3;
pub(crate) const STYLE_POSITIVE: StyleId = 4;
pub(crate) const STYLE_NEGATIVE: StyleId = 5;
