use crate::error::Result;
use crate::output;
use gcprop::core::groups::dictionary::GroupDictionary;
use tracing::info;

pub fn run() -> Result<()> {
    let dictionary = GroupDictionary::builtin();
    info!(fragments = dictionary.len(), "Listing built-in fragment table.");
    print!("{}", output::render_groups(dictionary));
    Ok(())
}
