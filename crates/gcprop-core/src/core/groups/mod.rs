//! # Groups Module
//!
//! The fragment table used by the group-contribution method.
//!
//! Each entry maps a fragment symbol (`CH3`, `OH`, `COOH`, ...) to its
//! per-occurrence increments for boiling point, melting point, critical
//! temperature and critical pressure. The table is a compile-time perfect-hash
//! map; it is never loaded, extended or recalibrated at runtime.
//!
//! ```
//! use gcprop::core::groups::dictionary::GroupDictionary;
//!
//! let oh = GroupDictionary::builtin().lookup("OH").unwrap();
//! assert_eq!(oh.contributions.boiling_point, 92.88);
//! ```

pub mod dictionary;
mod table;
