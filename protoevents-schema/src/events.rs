//! Event declarations extracted from a schema source.

/// A single `message` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDecl {
    /// Declared type name, used both as the event tag and the Go type name.
    pub name: String,
    /// 1-based line number of the declaration.
    pub line: usize,
}

impl EventDecl {
    /// Creates a new event declaration.
    #[must_use]
    pub fn new(name: impl Into<String>, line: usize) -> Self {
        Self {
            name: name.into(),
            line,
        }
    }
}

/// Ordered list of declared events.
///
/// Declarations keep source order and duplicates are preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventSchema {
    /// Declarations in file order.
    pub events: Vec<EventDecl>,
}

impl EventSchema {
    /// Creates an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a declaration.
    pub fn add_event(&mut self, event: EventDecl) {
        self.events.push(event);
    }

    /// Returns the number of declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if no declarations were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterates over the declared names in file order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.events.iter().map(|event| event.name.as_str())
    }
}

impl<'a> IntoIterator for &'a EventSchema {
    type Item = &'a EventDecl;
    type IntoIter = std::slice::Iter<'a, EventDecl>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_keeps_order_and_duplicates() {
        let mut schema = EventSchema::new();
        assert!(schema.is_empty());

        schema.add_event(EventDecl::new("Created", 3));
        schema.add_event(EventDecl::new("Deleted", 8));
        schema.add_event(EventDecl::new("Created", 12));

        assert_eq!(schema.len(), 3);
        let names: Vec<_> = schema.names().collect();
        assert_eq!(names, vec!["Created", "Deleted", "Created"]);
    }

    #[test]
    fn test_schema_iter() {
        let mut schema = EventSchema::new();
        schema.add_event(EventDecl::new("TaskStarted", 1));

        let lines: Vec<usize> = (&schema).into_iter().map(|e| e.line).collect();
        assert_eq!(lines, vec![1]);
    }
}
