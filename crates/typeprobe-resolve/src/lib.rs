//! Type-name resolution for typeprobe.
//!
//! [`TypeNameResolver`] turns a raw type token found on a field (`Foo`,
//! `Models\User[]`, `int`) into a canonical one (`App.Models.Foo`,
//! `App.Models.User[]`, `int`). Non-primitive names are searched, in order,
//! through:
//!
//! 1. the class's import table (alias match on the first segment),
//! 2. the class's own namespace,
//! 3. the class's declared root namespace (`__NAMESPACE__`),
//! 4. the global namespace,
//! 5. the mixin modules included by the class and its ancestors, filtered by
//!    the member being resolved ([`MemberContext`]).
//!
//! A name no layer can place is a [`ResolveError::UnresolvableType`].

mod cache;
mod context;
mod error;
mod resolver;
mod scope;

pub use cache::ScopeCache;
pub use context::MemberContext;
pub use error::ResolveError;
pub use resolver::TypeNameResolver;
pub use scope::mixin_closure;
