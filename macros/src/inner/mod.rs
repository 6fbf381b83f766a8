// Internal generators used by tola-prims itself.

pub mod tuple_seq;
