//! Dotted member-path reads and writes on live values.
//!
//! A path such as `"Owner.Name"` is resolved one segment at a time. Each
//! segment is looked up with [`locate`](crate::locate::locate) against the
//! **runtime** type of the current value, found through a
//! [`TypeRegistry`](crate::registry::TypeRegistry). Values stored in a
//! `Box<dyn Reflect>` are looked through, so a member declared with a loose
//! type can hold any registered value and still be traversed.
//!
//! Members declared as `Option<U>` are unwrapped when the path continues
//! through them; an empty option fails the access with
//! [`AccessError::EmptyValue`].
//!
//! Writes walk every segment but the last with mutable projections and
//! then write the terminal member. All checks happen before the write, so a
//! failed `set` leaves the graph untouched.
//!
//! # Examples
//!
//! ```
//! use binder_reflect::{derive::Reflect, Reflect, access::PathAccessor, registry::TypeRegistry};
//!
//! #[derive(Reflect)]
//! struct Pet {
//!     name: String,
//! }
//!
//! #[derive(Reflect)]
//! struct Owner {
//!     // Any registered value can live here.
//!     pet: Box<dyn Reflect>,
//! }
//!
//! let mut registry = TypeRegistry::new();
//! registry.register::<Owner>();
//! registry.register::<Pet>();
//!
//! let mut owner = Owner { pet: Box::new(Pet { name: "Rex".into() }) };
//! let accessor = PathAccessor::new(&registry);
//!
//! accessor.set_value(&mut owner, "pet.name", String::from("Fido")).unwrap();
//! assert_eq!(accessor.get_as::<String>(&owner, "pet.name").unwrap(), "Fido");
//!
//! assert!(accessor.get(&owner, "pet.age").is_err());
//! ```

// -----------------------------------------------------------------------------
// Modules

mod accessor;
mod error;
mod path;

// -----------------------------------------------------------------------------
// Exports

pub use accessor::PathAccessor;
pub use error::{AccessError, EmptyValueError, ParseError, ReadOnlyError, ResolutionError};
pub use error::TypeMismatchError;
pub use path::MemberPath;
