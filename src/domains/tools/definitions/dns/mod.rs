//! DNS record tools.
//!
//! One file per record type, each with a search (GET) and a create (POST)
//! tool. Updates and deletions go through the generic object tools, since
//! they only need the record's `_ref`.

pub mod a;
pub mod aaaa;
pub mod cname;
pub mod host;
pub mod mx;
pub mod ptr;
pub mod srv;
pub mod txt;

pub use a::{CreateARecordTool, SearchARecordsTool};
pub use aaaa::{CreateAaaaRecordTool, SearchAaaaRecordsTool};
pub use cname::{CreateCnameRecordTool, SearchCnameRecordsTool};
pub use host::{CreateHostRecordTool, SearchHostRecordsTool};
pub use mx::{CreateMxRecordTool, SearchMxRecordsTool};
pub use ptr::{CreatePtrRecordTool, SearchPtrRecordsTool};
pub use srv::{CreateSrvRecordTool, SearchSrvRecordsTool};
pub use txt::{CreateTxtRecordTool, SearchTxtRecordsTool};
