use crate::commands::{CmdMessage, CmdResult};
use crate::directory::Directory;
use crate::error::Result;

pub fn run(directory: &Directory) -> Result<CmdResult> {
    let records: Vec<_> = directory.all().cloned().collect();
    let mut result = CmdResult::default().with_listed_records(records);
    if result.listed_records.is_empty() {
        result.add_message(CmdMessage::info("No contacts saved."));
    }
    Ok(result)
}
