//! Documents holding several teams, each with its own header.
//!
//! Text blocks open with `=== [tag] folder/name ===`; packed records are
//! single lines of the form `tag]folder/name|<packed team>`. Both kinds can be
//! mixed freely in one document.
//!
//! Folder and name share one path segment split at its last `/`, so a team
//! name that itself contains `/` comes back with the prefix as its folder.

use crate::errors::ParseResult;
use crate::format::Format;
use crate::sets::{Resolver, FIELD_SEPARATOR};
use crate::species::Dex;
use crate::team::{parse_text_sets, Team};

const HEADER_FENCE: &str = "===";

/// Codec for multi-team documents.
pub struct Teams;

// Where a team came from, before its body has been parsed.
#[derive(Debug, PartialEq)]
enum Block<'a> {
    Text {
        header: Option<&'a str>,
        lines: Vec<&'a str>,
    },
    Packed(&'a str),
}

impl Teams {
    /// Every team in `document`, in order. Blocks that do not parse are skipped.
    pub fn import(document: &str) -> Vec<Team> {
        Self::import_with(document, None)
    }

    /// Like [`Teams::import`], normalizing species names through `dex`.
    pub fn import_with(document: &str, dex: Option<&Dex>) -> Vec<Team> {
        Self::import_blocks(document, dex)
            .into_iter()
            .filter_map(|result| {
                result
                    .map_err(|err| log::debug!("skipping team block: {err}"))
                    .ok()
            })
            .collect()
    }

    /// One result per block found in `document`, failures included.
    pub fn import_blocks(document: &str, dex: Option<&Dex>) -> Vec<ParseResult<Team>> {
        split_blocks(document)
            .into_iter()
            .map(|block| parse_block(block, dex))
            .collect()
    }

    /// The first team in `document`, if any.
    pub fn import_team(document: &str) -> Option<Team> {
        Self::import(document).into_iter().next()
    }

    /// A single packed record, with or without a header.
    pub fn unpack_team(record: &str) -> Option<Team> {
        parse_block(Block::Packed(record.trim()), None)
            .map_err(|err| log::debug!("unparseable packed record: {err}"))
            .ok()
    }

    /// Text document: a header, a blank line and the team body for each team,
    /// with a blank line after every block.
    pub fn export(teams: &[Team]) -> String {
        let mut out = String::new();
        for (i, team) in teams.iter().enumerate() {
            out.push_str(HEADER_FENCE);
            out.push(' ');
            let name = qualified_name(team, i);
            match team.format.tag() {
                Some(tag) => out.push_str(&format!("[{tag}] ")),
                // an empty tag keeps a leading `[` in the name from reading as one
                None if name.starts_with('[') => out.push_str("[] "),
                None => {}
            }
            out.push_str(&name);
            out.push(' ');
            out.push_str(HEADER_FENCE);
            out.push_str("\n\n");
            out.push_str(&team.to_text());
            out.push('\n');
        }
        out
    }

    /// Packed document: one `tag]folder/name|<packed>` line per team.
    pub fn pack(teams: &[Team]) -> String {
        teams
            .iter()
            .map(|team| {
                format!(
                    "{}{FIELD_SEPARATOR}{}\n",
                    team.packed_header(),
                    team.pack_sets()
                )
            })
            .collect()
    }
}

fn qualified_name(team: &Team, index: usize) -> String {
    let name = if team.name.is_empty() {
        format!("Untitled {}", index + 1)
    } else {
        team.name.clone()
    };
    if team.folder.is_empty() {
        name
    } else {
        format!("{}/{}", team.folder, name)
    }
}

fn is_header(line: &str) -> bool {
    line.len() >= 2 * HEADER_FENCE.len()
        && line.starts_with(HEADER_FENCE)
        && line.ends_with(HEADER_FENCE)
}

fn split_blocks(document: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    let mut current: Option<Block<'_>> = None;

    for raw in document.lines() {
        let line = raw.trim();
        if is_header(line) {
            blocks.extend(current.take());
            let inner = &line[HEADER_FENCE.len()..line.len() - HEADER_FENCE.len()];
            current = Some(Block::Text {
                header: Some(inner.trim()),
                lines: Vec::new(),
            });
        } else if line.contains(FIELD_SEPARATOR) {
            blocks.extend(current.take());
            blocks.push(Block::Packed(line));
        } else {
            match &mut current {
                Some(Block::Text { lines, .. }) => lines.push(raw),
                _ => {
                    if !line.is_empty() {
                        current = Some(Block::Text {
                            header: None,
                            lines: vec![raw],
                        });
                    }
                }
            }
        }
    }
    blocks.extend(current);
    blocks
}

fn parse_block(block: Block<'_>, dex: Option<&Dex>) -> ParseResult<Team> {
    match block {
        Block::Text { header, lines } => {
            let (tag, path) = match header {
                Some(header) => split_text_header(header),
                None => ("", ""),
            };
            let mut team = with_header(tag, path);
            let resolver = Resolver::new(dex, team.generation());
            team.sets = parse_text_sets(&lines.join("\n"), resolver)?;
            Ok(team)
        }
        Block::Packed(line) => Team::try_unpack(line, dex),
    }
}

/// `[tag] folder/name` -> (`tag`, `folder/name`). The tag is optional.
fn split_text_header(header: &str) -> (&str, &str) {
    if let Some(rest) = header.strip_prefix('[') {
        if let Some((tag, path)) = rest.split_once(']') {
            return (tag.trim(), path.trim());
        }
    }
    ("", header.trim())
}

/// `tag]folder/name|body` -> (Some((`tag`, `folder/name`)), `body`). Without a
/// `]` ahead of the first `|` the whole line (minus a leading `|`) is the body.
pub(crate) fn split_packed_header(line: &str) -> (Option<(&str, &str)>, &str) {
    let Some(pipe) = line.find(FIELD_SEPARATOR) else {
        return (None, line);
    };
    match line[..pipe].find(']') {
        Some(bracket) => (
            Some((&line[..bracket], &line[bracket + 1..pipe])),
            &line[pipe + 1..],
        ),
        None if pipe == 0 => (None, &line[1..]),
        None => (None, line),
    }
}

pub(crate) fn with_header(tag: &str, path: &str) -> Team {
    let (folder, name) = match path.rfind('/') {
        Some(slash) if slash > 0 => (&path[..slash], &path[slash + 1..]),
        _ => ("", path),
    };
    Team {
        sets: Vec::new(),
        name: name.trim().to_string(),
        folder: folder.trim().to_string(),
        format: Format::parse(tag),
    }
}
