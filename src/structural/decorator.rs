//! # Decorator: wrap a value to extend what it presents.
//!
//! [`Decorated`] wraps anything implementing [`Greet`] and renders a
//! richer card while keeping the wrapped value's contract - the
//! decorated value is itself a [`Greet`], so decorations stack.

/// Capability: render a one-line introduction.
pub trait Greet {
    fn say(&self) -> String;
}

/// A plain user.
#[derive(Debug, Clone)]
pub struct User {
    name: String,
}

impl User {
    /// Creates a user.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Greet for User {
    fn say(&self) -> String {
        format!("User: {}", self.name)
    }
}

/// Address decoration over any greeter.
pub struct Decorated<G: Greet> {
    inner: G,
    street: String,
    city: String,
}

impl<G: Greet> Decorated<G> {
    /// Wraps `inner`, extending its card with an address.
    pub fn new(inner: G, street: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            inner,
            street: street.into(),
            city: city.into(),
        }
    }
}

impl<G: Greet> Greet for Decorated<G> {
    fn say(&self) -> String {
        format!("Decorated {}, {}, {}", self.inner.say(), self.street, self.city)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_user() {
        assert_eq!(User::new("Kelly").say(), "User: Kelly");
    }

    #[test]
    fn test_decoration_extends_the_card() {
        let decorated = Decorated::new(User::new("Kelly"), "Broadway", "New York");
        assert_eq!(decorated.say(), "Decorated User: Kelly, Broadway, New York");
    }

    #[test]
    fn test_decorations_stack() {
        let twice = Decorated::new(
            Decorated::new(User::new("Kelly"), "Broadway", "New York"),
            "Market St",
            "San Francisco",
        );
        assert_eq!(
            twice.say(),
            "Decorated Decorated User: Kelly, Broadway, New York, Market St, San Francisco"
        );
    }

    #[test]
    fn test_callers_see_only_the_capability() {
        fn render(g: &dyn Greet) -> String {
            g.say()
        }
        let user = User::new("Kelly");
        let decorated = Decorated::new(User::new("Kelly"), "Broadway", "New York");
        assert_ne!(render(&user), render(&decorated));
    }
}
