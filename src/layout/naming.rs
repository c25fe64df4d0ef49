//! Directory and file naming schemes for the two memory card layouts
//!
//! ```text
//! MCGCP:  MemoryCards/{GAMEID}0100/{GAMEID}0100-1.raw
//! GCMCE:  MemoryCards/GC/DL-DOL-{GAMEID}-{REGION3}/DL-DOL-{GAMEID}-{REGION3}-1.raw
//! ```

/// Folder under the SD root holding every memory card image.
pub const MEMORY_CARDS_DIR: &str = "MemoryCards";

/// Subfolder of `MemoryCards` used by the GCMCE layout.
pub const GC_DIR: &str = "GC";

const MCGCP_SUFFIX: &str = "0100";
const GCMCE_PREFIX: &str = "DL-DOL-";
const SLOT_SUFFIX: &str = "-1.raw";

const GAME_ID_LEN: usize = 4;
const REGION_LEN: usize = 3;

fn is_game_id(s: &str) -> bool {
    s.len() == GAME_ID_LEN
        && s.bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}

fn is_region_code(s: &str) -> bool {
    s.len() == REGION_LEN && s.bytes().all(|b| b.is_ascii_uppercase())
}

/// Parse an MCGCP directory name (`GAFE0100`), returning the game id.
pub fn parse_mcgcp_dir_name(name: &str) -> Option<&str> {
    let game_id = name.strip_suffix(MCGCP_SUFFIX)?;
    is_game_id(game_id).then_some(game_id)
}

/// Parse a GCMCE directory name (`DL-DOL-GAFE-USA`), returning `(game_id, region3)`.
pub fn parse_gcmce_dir_name(name: &str) -> Option<(&str, &str)> {
    let rest = name.strip_prefix(GCMCE_PREFIX)?;
    let (game_id, region) = rest.split_once('-')?;
    (is_game_id(game_id) && is_region_code(region)).then_some((game_id, region))
}

pub fn mcgcp_dir_name(game_id: &str) -> String {
    format!("{}{}", game_id, MCGCP_SUFFIX)
}

pub fn gcmce_dir_name(game_id: &str, region: &str) -> String {
    format!("{}{}-{}", GCMCE_PREFIX, game_id, region)
}

/// Name of the slot 1 save file stored inside a card directory.
pub fn save_file_name(dir_name: &str) -> String {
    format!("{}{}", dir_name, SLOT_SUFFIX)
}

/// Region letter of a game: the last character of its id.
pub fn region_letter(game_id: &str) -> Option<char> {
    game_id.chars().last()
}
