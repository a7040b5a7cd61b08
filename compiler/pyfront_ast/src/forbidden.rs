//! Names that can never be bound.

use pyfront_ir::{Name, StringInterner};

/// Decides whether a name may appear in a binding position (keyword
/// argument name, lambda parameter, comprehension target).
pub trait NameValidator {
    /// The forbidden name's text, or `None` if `name` may be bound.
    fn forbidden(&self, name: Name) -> Option<&'static str>;
}

/// `None` and `__debug__`, pre-interned so checks are integer compares.
#[derive(Copy, Clone, Debug)]
pub struct ForbiddenNames {
    names: [(Name, &'static str); 2],
}

impl ForbiddenNames {
    pub fn new(interner: &StringInterner) -> Self {
        let entry = |text: &str| {
            let name = interner.intern(text);
            (name, interner.lookup(name))
        };
        ForbiddenNames {
            names: [entry("None"), entry("__debug__")],
        }
    }
}

impl NameValidator for ForbiddenNames {
    #[inline]
    fn forbidden(&self, name: Name) -> Option<&'static str> {
        self.names
            .iter()
            .find(|(forbidden, _)| *forbidden == name)
            .map(|(_, text)| *text)
    }
}

#[cfg(test)]
mod tests;
