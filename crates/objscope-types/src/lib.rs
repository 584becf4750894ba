// Types layer - value model and introspection capabilities
// Everything above this crate (engine, CLI) sees values only through
// the Reflect trait defined here.

pub mod error;
pub mod json;
pub mod reflect;
pub mod value;

pub use error::{AccessError, EnumerationError, Error, Result};
pub use json::from_json;
pub use reflect::{DEFAULT_REPR_DEPTH, Member, MemberKey, ObjId, ObjRef, Reflect};
pub use value::{AttrSlot, Callable, Dict, List, Object, Scalar};
