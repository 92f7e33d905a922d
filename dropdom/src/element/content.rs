#[derive(Debug, Clone, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    /// A line of the given glyph across the element's width.
    Rule(char),
    Children(Vec<super::Element>),
}

impl Content {
    pub fn children(&self) -> &[super::Element] {
        match self {
            Content::Children(children) => children,
            _ => &[],
        }
    }
}
