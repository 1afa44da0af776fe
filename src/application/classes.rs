//! Ordered class-attribute composition.

/// Collects class tokens in declaration order, skipping absent and empty ones.
#[derive(Debug, Clone, Default)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, token: impl AsRef<str>) -> Self {
        let token = token.as_ref().trim();
        if !token.is_empty() {
            self.tokens.push(token.to_string());
        }
        self
    }

    pub fn with_opt<T: AsRef<str>>(self, token: Option<T>) -> Self {
        match token {
            Some(token) => self.with(token),
            None => self,
        }
    }

    pub fn with_if(self, condition: bool, token: impl AsRef<str>) -> Self {
        if condition { self.with(token) } else { self }
    }

    pub fn build(&self) -> String {
        self.tokens.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::ClassList;

    #[test]
    fn keeps_declaration_order_and_skips_falsy_tokens() {
        let classes = ClassList::new()
            .with("flex")
            .with_opt(None::<&str>)
            .with("")
            .with_if(false, "mt-6")
            .with_opt(Some("py-12 px-4"))
            .with_if(true, "w-full")
            .build();

        assert_eq!(classes, "flex py-12 px-4 w-full");
    }

    #[test]
    fn empty_list_builds_empty_string() {
        let classes = ClassList::new().with_opt(None::<String>).with("  ");
        assert_eq!(classes.build(), "");
    }
}
