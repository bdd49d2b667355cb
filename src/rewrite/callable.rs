//! Rewrite callables and their application
//!
//! This module contains the function type used to rewrite output names and
//! the applier that checks its arity before handing it a name.

use std::fmt;
use std::sync::Arc;

use log::trace;

use crate::errors::{arity_error, Result};

type ArgsFn = dyn Fn(&[&str]) -> Result<String> + Send + Sync;

/// Declared parameter shape of a callable
///
/// Counts the positional parameters a callable requires and the optional
/// ones it accepts on top of those.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    /// Number of required positional parameters
    pub required: usize,
    /// Number of optional positional parameters
    pub optional: usize,
}

impl Signature {
    /// Creates a signature with the given parameter counts
    pub fn new(required: usize, optional: usize) -> Self {
        Signature { required, optional }
    }

    /// The only signature accepted for rewrite functions: one required argument
    pub fn unary() -> Self {
        Signature::new(1, 0)
    }

    /// Checks that the signature takes exactly one positional argument
    ///
    /// Optional parameters are rejected just like missing or surplus
    /// required ones.
    ///
    /// # Errors
    /// Returns `Error::Arity` for any other shape
    pub fn ensure_single_argument(&self) -> Result<()> {
        if *self == Signature::unary() {
            Ok(())
        } else {
            Err(arity_error(self.required, self.optional))
        }
    }

    /// Whether a call with `count` positional arguments fits this signature
    pub fn accepts(&self, count: usize) -> bool {
        count >= self.required && count <= self.required + self.optional
    }
}

/// A function that rewrites a name, together with its declared signature
///
/// Cloning is cheap: the function itself is shared. Callables are `Send`
/// and `Sync`, so a single instance can rewrite names from several threads.
#[derive(Clone)]
pub struct Callable {
    signature: Signature,
    func: Arc<ArgsFn>,
}

impl Callable {
    /// Wraps a closure taking exactly one name
    ///
    /// # Examples
    /// ```
    /// use name_rewrite::rewrite::{apply_name_rewrite, Callable};
    ///
    /// let add_suffix = Callable::unary(|name| Ok(format!("{name}.bak")));
    /// assert_eq!(apply_name_rewrite("foo", Some(&add_suffix)).unwrap(), "foo.bak");
    /// ```
    pub fn unary<F>(func: F) -> Self
    where
        F: Fn(&str) -> Result<String> + Send + Sync + 'static,
    {
        Callable {
            signature: Signature::unary(),
            func: Arc::new(move |args: &[&str]| match args {
                [name] => func(*name),
                _ => Err(arity_error(1, 0)),
            }),
        }
    }

    /// Wraps a closure whose parameter shape is only known at run time
    ///
    /// The closure receives the positional arguments as a slice. Such
    /// callables are accepted here but rejected by [`apply_name_rewrite`]
    /// unless `signature` is exactly one required argument.
    pub fn with_signature<F>(signature: Signature, func: F) -> Self
    where
        F: Fn(&[&str]) -> Result<String> + Send + Sync + 'static,
    {
        Callable {
            signature,
            func: Arc::new(func),
        }
    }

    /// Gets the declared signature
    pub fn signature(&self) -> Signature {
        self.signature
    }

    /// Invokes the callable with positional arguments
    ///
    /// # Errors
    /// Returns `Error::Arity` if the argument count does not fit the
    /// declared signature, otherwise whatever the callable returns
    pub fn invoke(&self, args: &[&str]) -> Result<String> {
        if !self.signature.accepts(args.len()) {
            return Err(arity_error(self.signature.required, self.signature.optional));
        }
        (self.func)(args)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callable")
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

/// Applies an optional rewrite function to a name
///
/// Without a function the name is returned unchanged. With one, its
/// signature must be exactly one positional argument; this is checked
/// before the function is called.
///
/// # Arguments
/// * `name` - The name to rewrite
/// * `func` - The rewrite function, if any
///
/// # Returns
/// * `Result<String>` - The rewritten name
///
/// # Errors
/// * Returns `Error::Arity` if the function does not take exactly one argument
/// * Propagates any error returned by the function itself
pub fn apply_name_rewrite(name: &str, func: Option<&Callable>) -> Result<String> {
    let Some(callable) = func else {
        return Ok(name.to_string());
    };

    callable.signature().ensure_single_argument()?;
    let rewritten = callable.invoke(&[name])?;
    trace!("Rewrote name '{name}' to '{rewritten}'");

    Ok(rewritten)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{substitution_error, Error};
    use std::sync::atomic::{AtomicBool, Ordering};

    fn tracked(signature: Signature) -> (Callable, Arc<AtomicBool>) {
        let called = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&called);
        let callable = Callable::with_signature(signature, move |_| {
            flag.store(true, Ordering::SeqCst);
            Ok("bar".to_string())
        });
        (callable, called)
    }

    #[test]
    fn test_identity_without_function() {
        assert_eq!(apply_name_rewrite("foo", None).unwrap(), "foo");
        assert_eq!(apply_name_rewrite("", None).unwrap(), "");
    }

    #[test]
    fn test_rejects_wrong_arity_without_invoking() {
        for signature in [
            Signature::new(0, 0),
            Signature::new(2, 0),
            Signature::new(1, 1),
            Signature::new(0, 1),
        ] {
            let (callable, called) = tracked(signature);
            let result = apply_name_rewrite("foo", Some(&callable));

            assert!(
                matches!(result, Err(Error::Arity { .. })),
                "Signature {signature:?} should be rejected"
            );
            assert!(
                !called.load(Ordering::SeqCst),
                "Callable with {signature:?} must not be invoked"
            );
        }
    }

    #[test]
    fn test_applies_unary_function() {
        let replace_all = Callable::unary(|_| Ok("bar".to_string()));
        assert_eq!(apply_name_rewrite("foo", Some(&replace_all)).unwrap(), "bar");

        let append = Callable::unary(|name| Ok(format!("{name}bar")));
        assert_eq!(apply_name_rewrite("foo", Some(&append)).unwrap(), "foobar");
    }

    #[test]
    fn test_runtime_signature_of_one_is_accepted() {
        let (callable, called) = tracked(Signature::unary());
        assert_eq!(apply_name_rewrite("foo", Some(&callable)).unwrap(), "bar");
        assert!(called.load(Ordering::SeqCst));
    }

    #[test]
    fn test_function_errors_are_propagated() {
        let failing = Callable::unary(|_| Err(substitution_error("x", "boom")));
        let result = apply_name_rewrite("foo", Some(&failing));
        assert!(matches!(result, Err(Error::Substitution { .. })));
    }

    #[test]
    fn test_invoke_checks_argument_count() {
        let callable = Callable::unary(|name| Ok(name.to_uppercase()));
        assert!(matches!(callable.invoke(&[]), Err(Error::Arity { .. })));
        assert!(matches!(callable.invoke(&["a", "b"]), Err(Error::Arity { .. })));
        assert_eq!(callable.invoke(&["a"]).unwrap(), "A");
    }

    #[test]
    fn test_signature_accepts() {
        let signature = Signature::new(1, 2);
        assert!(!signature.accepts(0));
        assert!(signature.accepts(1));
        assert!(signature.accepts(3));
        assert!(!signature.accepts(4));
    }

    #[test]
    fn test_debug_shows_signature() {
        let callable = Callable::unary(|name| Ok(name.to_string()));
        let debug = format!("{callable:?}");
        assert!(debug.contains("required: 1"));
    }
}
