pub mod as_set;
pub mod asn;
pub mod aut_num;
pub mod codec;
pub mod description;
pub mod extra;
pub mod record;
pub mod route;
pub mod route6;
pub mod route_set;

pub use as_set::{as_set_members, as_set_name, AsSet};
pub use asn::{asn_name, Asn, ParseAsnError};
pub use aut_num::{aut_num_members, AutNum};
pub use codec::{decode, encode, DecodeError, EncodeError, FieldDescriptor, InvalidTagError, Strategy};
pub use description::Description;
pub use extra::Extra;
pub use record::{AttributeValue, Field, FieldMut, Record, ValueError, ValueMut, ValueRef};
pub use route::Route;
pub use route6::Route6;
pub use route_set::{rs_members, rs_name, RouteSet};
