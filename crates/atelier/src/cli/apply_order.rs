//! Media order resolution command handler.

use atelier::{AtelierResult, JsonError, PlacedMedia, RemoteId, apply_media_order, parse_wire};
use tracing::instrument;

/// Resolve `order` against the stored ids and print the final placement.
#[instrument(skip(existing, removed))]
pub fn handle_apply_order(
    existing: &[u64],
    removed: &[u64],
    new_count: usize,
    order: &str,
    json: bool,
) -> AtelierResult<()> {
    let existing: Vec<RemoteId> = existing.iter().copied().map(RemoteId).collect();
    let removed: Vec<RemoteId> = removed.iter().copied().map(RemoteId).collect();

    let placed = apply_media_order(&existing, &removed, new_count, &parse_wire(order))?;

    if json {
        let out = serde_json::to_string_pretty(&placed).map_err(JsonError::from)?;
        println!("{}", out);
        return Ok(());
    }

    for (position, item) in placed.iter().enumerate() {
        match item {
            PlacedMedia::Existing { id } => println!("{}: stored {}", position, id),
            PlacedMedia::Uploaded { batch_index } => {
                println!("{}: upload #{}", position, batch_index)
            }
        }
    }
    Ok(())
}
