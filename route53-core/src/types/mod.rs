//! Type definition module

mod change;
mod record;
mod zone;

pub use change::{ChangeAction, ChangeInfo, ChangeStatus};
pub use record::{
    AliasTarget, MAX_SET_IDENTIFIER_LEN, RecordData, RecordFields, RecordSet, RecordType,
    RecordTypeTraits,
};
pub use zone::Zone;
