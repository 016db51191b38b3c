//! Snapshot persistence: a flat, line-oriented text format and file slots.
//!
//! ```text
//! [game]             key:value scalars and capability flags
//! [cities]           CSV header + one row per city
//! [attack_missiles]  CSV header + rows
//! [cruise_missiles]  CSV header + rows
//! [tech]             researched / available / researching / prev_researching
//! ```
//!
//! Tech lists hold node names separated by `|`. Loading reseeds the RNG from
//! `seed + turn`, so a restored game stays deterministic but does not replay
//! the original roll sequence.

use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use salvo_core::constants::SNAPSHOT_VERSION;
use salvo_core::enums::{Capability, Difficulty, GameOutcome, TechId};
use salvo_core::error::{GameError, Result};
use salvo_core::types::Position;

use crate::board::Board;
use crate::city::{City, CityId};
use crate::engine::Game;
use crate::missile::{Missile, MissileId, MissileKind};
use crate::tech_tree::TechTree;

const CITY_HEADER: &str = "name,y,x,hitpoint,productivity,base_productivity,countdown,cruise_storage";
const ATTACK_HEADER: &str = "id,y,x,target_y,target_x,city,damage,speed,exploded,is_aimed,intercepted";
const CRUISE_HEADER: &str = "id,y,x,target_y,target_x,target_id,damage,speed,exploded";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Section {
    Game,
    Cities,
    AttackMissiles,
    CruiseMissiles,
    Tech,
}

impl Section {
    const ALL: [Section; 5] = [
        Section::Game,
        Section::Cities,
        Section::AttackMissiles,
        Section::CruiseMissiles,
        Section::Tech,
    ];

    fn name(self) -> &'static str {
        match self {
            Section::Game => "game",
            Section::Cities => "cities",
            Section::AttackMissiles => "attack_missiles",
            Section::CruiseMissiles => "cruise_missiles",
            Section::Tech => "tech",
        }
    }

    fn parse(name: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.name() == name)
    }

    fn csv_header(self) -> Option<&'static str> {
        match self {
            Section::Cities => Some(CITY_HEADER),
            Section::AttackMissiles => Some(ATTACK_HEADER),
            Section::CruiseMissiles => Some(CRUISE_HEADER),
            Section::Game | Section::Tech => None,
        }
    }
}

// --- Writing ---

fn tech_list(ids: impl IntoIterator<Item = TechId>) -> String {
    ids.into_iter().map(TechId::name).collect::<Vec<_>>().join("|")
}

/// Serialize the full game state.
pub fn to_snapshot(game: &Game) -> String {
    let mut lines: Vec<String> = vec!["[game]".into()];
    let weapons = game.weapons.view();
    let scalars: [(&str, String); 18] = [
        ("version", SNAPSHOT_VERSION.to_string()),
        ("seed", game.seed.to_string()),
        ("turn", game.turn.to_string()),
        ("deposit", game.deposit.to_string()),
        ("productivity", game.productivity.to_string()),
        ("difficulty", game.difficulty.level().to_string()),
        ("enemy_hitpoint", game.enemy_hitpoint.to_string()),
        ("score", game.score.to_string()),
        ("casualties", game.casualties.to_string()),
        ("cursor_y", game.cursor.y.to_string()),
        ("cursor_x", game.cursor.x.to_string()),
        ("next_missile_id", game.missiles.next_id().to_string()),
        ("standard_bomb", weapons.standard_bomb.to_string()),
        ("dirty_bomb", weapons.dirty_bomb.to_string()),
        ("hydrogen_bomb", weapons.hydrogen_bomb.to_string()),
        ("iron_curtain", weapons.iron_curtain.to_string()),
        ("outcome", game.outcome.as_str().to_string()),
        ("remaining_time", game.tech.remaining_time().to_string()),
    ];
    lines.extend(scalars.iter().map(|(k, v)| format!("{k}:{v}")));
    lines.extend(
        Capability::ALL
            .iter()
            .map(|c| format!("{}:{}", c.key(), game.capabilities.has(*c))),
    );

    lines.push("[cities]".into());
    lines.push(CITY_HEADER.into());
    for c in &game.cities {
        lines.push(format!(
            "{},{},{},{},{},{},{},{}",
            c.name,
            c.position.y,
            c.position.x,
            c.hitpoint,
            c.productivity,
            c.base_productivity,
            c.countdown,
            c.cruise_storage
        ));
    }

    lines.push("[attack_missiles]".into());
    lines.push(ATTACK_HEADER.into());
    for m in game.missiles.iter() {
        if let MissileKind::Attack { city, is_aimed, intercepted } = m.kind {
            lines.push(format!(
                "{},{},{},{},{},{},{},{},{},{},{}",
                m.id.0,
                m.position.y,
                m.position.x,
                m.target.y,
                m.target.x,
                city.0,
                m.damage,
                m.speed,
                m.exploded,
                is_aimed,
                intercepted
            ));
        }
    }

    lines.push("[cruise_missiles]".into());
    lines.push(CRUISE_HEADER.into());
    for m in game.missiles.iter() {
        if let MissileKind::Cruise { target } = m.kind {
            lines.push(format!(
                "{},{},{},{},{},{},{},{},{}",
                m.id.0,
                m.position.y,
                m.position.x,
                m.target.y,
                m.target.x,
                target.0,
                m.damage,
                m.speed,
                m.exploded
            ));
        }
    }

    lines.push("[tech]".into());
    lines.push(format!("researched:{}", tech_list(game.tech.researched().iter().copied())));
    lines.push(format!("available:{}", tech_list(game.tech.available().iter().copied())));
    lines.push(format!("researching:{}", tech_list(game.tech.researching())));
    lines.push(format!("prev_researching:{}", tech_list(game.tech.prev_researching())));

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

// --- Reading ---

/// `key:value` lines of one section, with their line numbers.
#[derive(Default)]
struct Scalars<'a> {
    header_line: usize,
    values: HashMap<&'a str, (usize, &'a str)>,
}

impl<'a> Scalars<'a> {
    fn raw(&self, key: &str) -> Result<(usize, &'a str)> {
        self.values
            .get(key)
            .copied()
            .ok_or_else(|| GameError::malformed(self.header_line, format!("missing key {key}")))
    }

    fn get<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let (line, raw) = self.raw(key)?;
        raw.parse()
            .map_err(|e| GameError::malformed(line, format!("{key}: {e}")))
    }
}

/// One CSV data row.
struct Row<'a> {
    line: usize,
    cells: Vec<&'a str>,
}

impl Row<'_> {
    fn get<T>(&self, index: usize, column: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let raw = self
            .cells
            .get(index)
            .ok_or_else(|| GameError::malformed(self.line, format!("missing column {column}")))?;
        raw.trim()
            .parse()
            .map_err(|e| GameError::malformed(self.line, format!("{column}: {e}")))
    }
}

#[derive(Default)]
struct Document<'a> {
    game: Scalars<'a>,
    tech: Scalars<'a>,
    cities: Vec<Row<'a>>,
    attack_missiles: Vec<Row<'a>>,
    cruise_missiles: Vec<Row<'a>>,
    seen: HashSet<Section>,
}

fn parse_document(text: &str) -> Result<Document<'_>> {
    let mut doc = Document::default();
    let mut section: Option<Section> = None;
    let mut header_pending = false;

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim_end();
        if line.trim().is_empty() {
            continue;
        }

        if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            let next = Section::parse(name)
                .ok_or_else(|| GameError::malformed(line_no, format!("unknown section [{name}]")))?;
            if !doc.seen.insert(next) {
                return Err(GameError::malformed(line_no, format!("duplicate section [{name}]")));
            }
            match next {
                Section::Game => doc.game.header_line = line_no,
                Section::Tech => doc.tech.header_line = line_no,
                _ => {}
            }
            section = Some(next);
            header_pending = next.csv_header().is_some();
            continue;
        }

        let Some(current) = section else {
            return Err(GameError::malformed(line_no, "data before the first section"));
        };

        if let Some(expected) = current.csv_header() {
            if header_pending {
                if line != expected {
                    return Err(GameError::malformed(line_no, format!("expected header {expected}")));
                }
                header_pending = false;
                continue;
            }
            let row = Row {
                line: line_no,
                cells: line.split(',').collect(),
            };
            match current {
                Section::Cities => doc.cities.push(row),
                Section::AttackMissiles => doc.attack_missiles.push(row),
                _ => doc.cruise_missiles.push(row),
            }
            continue;
        }

        let (key, value) = line
            .split_once(':')
            .ok_or_else(|| GameError::malformed(line_no, "expected key:value"))?;
        let target = if current == Section::Game { &mut doc.game } else { &mut doc.tech };
        target.values.insert(key.trim(), (line_no, value.trim()));
    }

    if let Some(missing) = Section::ALL.into_iter().find(|s| !doc.seen.contains(s)) {
        let end = text.lines().count();
        return Err(GameError::malformed(end, format!("missing section [{}]", missing.name())));
    }
    Ok(doc)
}

fn parse_city(row: &Row<'_>) -> Result<City> {
    // names are stored verbatim, so no trimming here
    let name = row.cells.first().copied().unwrap_or_default().to_string();
    if name.is_empty() || name.trim() != name {
        return Err(GameError::malformed(row.line, format!("invalid city name {name:?}")));
    }
    Ok(City {
        name,
        position: Position::new(row.get(1, "y")?, row.get(2, "x")?),
        hitpoint: row.get(3, "hitpoint")?,
        productivity: row.get(4, "productivity")?,
        base_productivity: row.get(5, "base_productivity")?,
        countdown: row.get(6, "countdown")?,
        cruise_storage: row.get(7, "cruise_storage")?,
    })
}

fn parse_attack(row: &Row<'_>, city_count: usize) -> Result<Missile> {
    let city: usize = row.get(5, "city")?;
    if city >= city_count {
        return Err(GameError::malformed(row.line, format!("city index {city} out of range")));
    }
    Ok(Missile {
        id: MissileId(row.get(0, "id")?),
        position: Position::new(row.get(1, "y")?, row.get(2, "x")?),
        target: Position::new(row.get(3, "target_y")?, row.get(4, "target_x")?),
        exploded: row.get(8, "exploded")?,
        damage: row.get(6, "damage")?,
        speed: row.get(7, "speed")?,
        kind: MissileKind::Attack {
            city: CityId(city),
            is_aimed: row.get(9, "is_aimed")?,
            intercepted: row.get(10, "intercepted")?,
        },
    })
}

fn parse_cruise(row: &Row<'_>, attack_ids: &HashSet<MissileId>) -> Result<Missile> {
    let target = MissileId(row.get(5, "target_id")?);
    if !attack_ids.contains(&target) {
        return Err(GameError::malformed(
            row.line,
            format!("interceptor pursues unknown missile {target}"),
        ));
    }
    Ok(Missile {
        id: MissileId(row.get(0, "id")?),
        position: Position::new(row.get(1, "y")?, row.get(2, "x")?),
        target: Position::new(row.get(3, "target_y")?, row.get(4, "target_x")?),
        exploded: row.get(8, "exploded")?,
        damage: row.get(6, "damage")?,
        speed: row.get(7, "speed")?,
        kind: MissileKind::Cruise { target },
    })
}

/// Research lists must describe a state the tree could have reached.
fn check_research(
    tree: &TechTree,
    line: usize,
    researched: &[TechId],
    available: &[TechId],
    researching: Option<TechId>,
    remaining_time: u32,
) -> Result<()> {
    let done: HashSet<TechId> = researched.iter().copied().collect();
    if done.len() != researched.len() {
        return Err(GameError::malformed(line, "researched lists a technology twice"));
    }
    let mut offered = HashSet::new();
    for &id in available {
        if done.contains(&id) {
            return Err(GameError::malformed(
                line,
                format!("{} is researched and available", id.name()),
            ));
        }
        if !offered.insert(id) || researching == Some(id) {
            return Err(GameError::malformed(line, format!("{} listed twice", id.name())));
        }
        if let Some(missing) = tree.node(id).prerequisites.iter().find(|p| !done.contains(p)) {
            return Err(GameError::malformed(
                line,
                format!("{} is available before {}", id.name(), missing.name()),
            ));
        }
    }
    match researching {
        Some(id) if done.contains(&id) => Err(GameError::malformed(
            line,
            format!("{} is researched and in progress", id.name()),
        )),
        Some(id) => match tree.node(id).prerequisites.iter().find(|p| !done.contains(p)) {
            Some(missing) => Err(GameError::malformed(
                line,
                format!("{} is in progress before {}", id.name(), missing.name()),
            )),
            None => Ok(()),
        },
        None if remaining_time > 0 => Err(GameError::malformed(
            line,
            format!("remaining_time {remaining_time} with nothing in progress"),
        )),
        None => Ok(()),
    }
}

fn tech_ids(tree: &TechTree, raw: &str) -> Result<Vec<TechId>> {
    raw.split('|')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| tree.node_by_name(name).map(|n| n.id))
        .collect()
}

fn single_tech(tree: &TechTree, scalars: &Scalars<'_>, key: &str) -> Result<Option<TechId>> {
    let (line, raw) = scalars.raw(key)?;
    let ids = tech_ids(tree, raw)?;
    if ids.len() > 1 {
        return Err(GameError::malformed(line, format!("{key} lists more than one technology")));
    }
    Ok(ids.first().copied())
}

/// Rebuild a game from snapshot text against the given board.
pub fn from_snapshot(text: &str, board: Board) -> Result<Game> {
    let doc = parse_document(text)?;
    let scalars = &doc.game;

    let version: u32 = scalars.get("version")?;
    if version != SNAPSHOT_VERSION {
        let (line, _) = scalars.raw("version")?;
        return Err(GameError::malformed(line, format!("unsupported version {version}")));
    }
    let level: u8 = scalars.get("difficulty")?;
    let difficulty = Difficulty::from_level(level).ok_or_else(|| {
        GameError::malformed(scalars.header_line, format!("unknown difficulty {level}"))
    })?;
    let seed: u64 = scalars.get("seed")?;

    let mut game = Game::empty(board, seed, difficulty);
    game.turn = scalars.get("turn")?;
    game.deposit = scalars.get("deposit")?;
    game.productivity = scalars.get("productivity")?;
    game.enemy_hitpoint = scalars.get("enemy_hitpoint")?;
    game.score = scalars.get("score")?;
    game.casualties = scalars.get("casualties")?;
    game.cursor = Position::new(scalars.get("cursor_y")?, scalars.get("cursor_x")?);
    game.weapons.standard_bomb = scalars.get("standard_bomb")?;
    game.weapons.dirty_bomb = scalars.get("dirty_bomb")?;
    game.weapons.hydrogen_bomb = scalars.get("hydrogen_bomb")?;
    game.weapons.iron_curtain = scalars.get("iron_curtain")?;
    let (line, raw) = scalars.raw("outcome")?;
    game.outcome = GameOutcome::parse(raw)
        .ok_or_else(|| GameError::malformed(line, format!("unknown outcome {raw}")))?;
    for capability in Capability::ALL {
        if scalars.get::<bool>(capability.key())? {
            game.capabilities.set(capability);
        }
    }

    for row in &doc.cities {
        let city = parse_city(row)?;
        if !game.board.contains(city.position) {
            return Err(GameError::malformed(
                row.line,
                format!("{} lies outside the board", city.name),
            ));
        }
        game.cities.push(city);
    }
    if game.cities.is_empty() {
        return Err(GameError::malformed(scalars.header_line, "snapshot has no cities"));
    }

    let mut missiles = Vec::new();
    let mut ids = HashSet::new();
    let mut attack_ids = HashSet::new();
    for row in &doc.attack_missiles {
        let missile = parse_attack(row, game.cities.len())?;
        if !ids.insert(missile.id) {
            return Err(GameError::malformed(row.line, format!("duplicate missile {}", missile.id)));
        }
        attack_ids.insert(missile.id);
        missiles.push(missile);
    }
    for row in &doc.cruise_missiles {
        let missile = parse_cruise(row, &attack_ids)?;
        if !ids.insert(missile.id) {
            return Err(GameError::malformed(row.line, format!("duplicate missile {}", missile.id)));
        }
        missiles.push(missile);
    }
    game.missiles.restore(missiles, scalars.get("next_missile_id")?);

    let tree = &game.tech;
    let researched = tech_ids(tree, doc.tech.raw("researched")?.1)?;
    let available = tech_ids(tree, doc.tech.raw("available")?.1)?;
    let researching = single_tech(tree, &doc.tech, "researching")?;
    let prev_researching = single_tech(tree, &doc.tech, "prev_researching")?;
    let remaining_time = scalars.get("remaining_time")?;
    check_research(
        tree,
        doc.tech.header_line,
        &researched,
        &available,
        researching,
        remaining_time,
    )?;
    game.tech
        .restore(researched, available, researching, prev_researching, remaining_time);

    game.rng = ChaCha8Rng::seed_from_u64(game.seed.wrapping_add(game.turn as u64));
    Ok(game)
}

// --- Files ---

fn save_path(dir: &Path, slot: &str) -> PathBuf {
    dir.join(format!("{slot}.sav"))
}

/// Write the game to `<dir>/<slot>.sav`, creating `dir` if needed.
pub fn save_to_file(dir: &Path, slot: &str, game: &Game) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = save_path(dir, slot);
    fs::write(&path, to_snapshot(game))?;
    info!(path = %path.display(), turn = game.turn, "game saved");
    Ok(path)
}

pub fn load_from_file(dir: &Path, slot: &str, board: Board) -> Result<Game> {
    let path = save_path(dir, slot);
    let text = fs::read_to_string(&path)?;
    let game = from_snapshot(&text, board)?;
    info!(path = %path.display(), turn = game.turn, "game loaded");
    Ok(game)
}

/// Slot names present in `dir`, sorted. A missing directory has no saves.
pub fn list_saves(dir: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut slots: Vec<String> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "sav"))
        .filter_map(|path| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
        .collect();
    slots.sort();
    slots
}

pub fn delete_save(dir: &Path, slot: &str) -> Result<()> {
    let path = save_path(dir, slot);
    if path.exists() {
        fs::remove_file(&path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn game() -> Game {
        Game::new(GameConfig::default()).unwrap()
    }

    #[test]
    fn snapshot_lists_every_section() {
        let text = to_snapshot(&game());
        for header in ["[game]", "[cities]", "[attack_missiles]", "[cruise_missiles]", "[tech]"] {
            assert!(text.lines().any(|l| l == header), "missing {header}");
        }
        assert!(text.contains("seed:42"));
        assert!(text.contains("iron_curtain_tech:false"));
        assert!(text.contains("available:Radar|"));
    }

    #[test]
    fn unknown_tech_name_is_fatal() {
        let g = game();
        let text = to_snapshot(&g).replace("researched:", "researched:Warp Drive");
        let err = from_snapshot(&text, g.board.clone()).unwrap_err();
        assert!(matches!(err, GameError::UnknownTechnology(ref n) if n == "Warp Drive"));
        assert!(err.is_fatal());
    }

    #[test]
    fn malformed_value_reports_line() {
        let g = game();
        let text = to_snapshot(&g).replace("turn:0", "turn:soon");
        match from_snapshot(&text, g.board.clone()) {
            Err(GameError::MalformedSnapshot { line, message }) => {
                assert_eq!(line, 4);
                assert!(message.contains("turn"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn rejects_structural_damage() {
        let g = game();
        let board = g.board.clone();
        let text = to_snapshot(&g);

        let no_cities = text.replace("[cities]", "[towns]");
        assert!(matches!(
            from_snapshot(&no_cities, board.clone()),
            Err(GameError::MalformedSnapshot { .. })
        ));

        let bad_header = text.replace(CITY_HEADER, "name,y,x");
        assert!(matches!(
            from_snapshot(&bad_header, board.clone()),
            Err(GameError::MalformedSnapshot { .. })
        ));

        let orphan = text.replace(
            CRUISE_HEADER,
            &format!("{CRUISE_HEADER}\n900,1,1,2,2,777,0,3,false"),
        );
        assert!(matches!(
            from_snapshot(&orphan, board.clone()),
            Err(GameError::MalformedSnapshot { .. })
        ));

        assert!(matches!(
            from_snapshot("seed:1\n", board),
            Err(GameError::MalformedSnapshot { line: 1, .. })
        ));
    }

    /// Replace the value of one `key:value` line.
    fn set_key(text: &str, key: &str, value: &str) -> String {
        let prefix = format!("{key}:");
        text.lines()
            .map(|l| if l.starts_with(&prefix) { format!("{prefix}{value}") } else { l.to_string() })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn research_state(researched: &str, available: &str, researching: &str, remaining: &str) -> String {
        let text = to_snapshot(&game());
        let text = set_key(&text, "researched", researched);
        let text = set_key(&text, "available", available);
        let text = set_key(&text, "researching", researching);
        set_key(&text, "remaining_time", remaining)
    }

    fn is_malformed(text: &str) -> bool {
        matches!(
            from_snapshot(text, game().board.clone()),
            Err(GameError::MalformedSnapshot { .. })
        )
    }

    #[test]
    fn consistent_research_state_loads() {
        let text = research_state("Radar", "Phased Array Radar", "", "0");
        let g = from_snapshot(&text, game().board.clone()).unwrap();
        assert_eq!(g.tech().researched(), &[TechId::Radar]);
        assert!(g.tech().is_available(TechId::PhasedArray));

        let text = research_state("Radar", "", "Phased Array Radar", "4");
        assert!(from_snapshot(&text, game().board.clone()).is_ok());
    }

    #[test]
    fn rejects_node_researched_and_in_progress() {
        assert!(is_malformed(&research_state("Radar", "", "Radar", "1")));
    }

    #[test]
    fn rejects_duplicate_researched_node() {
        assert!(is_malformed(&research_state("Radar|Radar", "", "", "0")));
    }

    #[test]
    fn rejects_researched_node_offered_again() {
        assert!(is_malformed(&research_state("Radar", "Radar", "", "0")));
    }

    #[test]
    fn rejects_timer_without_research() {
        assert!(is_malformed(&research_state("", "Radar", "", "3")));
    }

    #[test]
    fn rejects_available_node_with_locked_prerequisite() {
        assert!(is_malformed(&research_state("", "Phased Array Radar", "", "0")));
        assert!(is_malformed(&research_state("", "", "Phased Array Radar", "2")));
    }

    #[test]
    fn rejects_city_off_the_board() {
        let text = to_snapshot(&game()).replace("\nAvalon,5,12,", "\nAvalon,99,12,");
        assert!(text.contains("Avalon,99,12,"));
        assert!(is_malformed(&text));
    }

    #[test]
    fn save_list_and_delete() {
        let dir = std::env::temp_dir().join("salvo_test_save_slots");
        let _ = fs::remove_dir_all(&dir);
        assert!(list_saves(&dir).is_empty());

        let g = game();
        let path = save_to_file(&dir, "beta", &g).unwrap();
        assert!(path.ends_with("beta.sav"));
        save_to_file(&dir, "alpha", &g).unwrap();
        assert_eq!(list_saves(&dir), vec!["alpha".to_string(), "beta".to_string()]);

        let loaded = load_from_file(&dir, "alpha", g.board.clone()).unwrap();
        assert_eq!(loaded.turn(), g.turn());

        delete_save(&dir, "alpha").unwrap();
        delete_save(&dir, "alpha").unwrap();
        assert_eq!(list_saves(&dir), vec!["beta".to_string()]);

        assert!(matches!(
            load_from_file(&dir, "missing", g.board.clone()),
            Err(GameError::Io(_))
        ));
        let _ = fs::remove_dir_all(&dir);
    }
}
