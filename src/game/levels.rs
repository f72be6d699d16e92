//! Level table: goal score per level
//!
//! Rows come from CSV text with a header line:
//! `level,goal,time_limit_sec`. Rows without a numeric level and goal are
//! skipped. The time limit is carried along but not used for play.

use once_cell::sync::Lazy;

/// Embedded default level table.
static LEVELS_DATA: &str = include_str!("../../data/levels.csv");

static BUILTIN_LEVELS: Lazy<LevelTable> = Lazy::new(|| LevelTable::parse(LEVELS_DATA));

/// One row of the level table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelInfo {
    pub level: u32,
    pub goal: u32,
    pub time_limit_sec: u32,
}

/// Ordered level rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelTable {
    rows: Vec<LevelInfo>,
}

impl LevelTable {
    pub fn new(rows: Vec<LevelInfo>) -> Self {
        Self { rows }
    }

    /// Parse CSV text, skipping the header and malformed rows.
    pub fn parse(text: &str) -> Self {
        let rows = text
            .lines()
            .skip(1)
            .filter_map(|line| {
                let mut fields = line.trim().split(',').map(str::trim);
                let level = fields.next()?.parse().ok()?;
                let goal = fields.next()?.parse().ok()?;
                let time_limit_sec = fields.next().and_then(|f| f.parse().ok()).unwrap_or(0);
                Some(LevelInfo {
                    level,
                    goal,
                    time_limit_sec,
                })
            })
            .collect();
        Self { rows }
    }

    /// The table compiled into the binary.
    pub fn builtin() -> &'static LevelTable {
        &BUILTIN_LEVELS
    }

    /// Look up a level. `None` means there is no such level.
    pub fn get(&self, level: u32) -> Option<&LevelInfo> {
        self.rows.iter().find(|row| row.level == level)
    }

    pub fn rows(&self) -> &[LevelInfo] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rows() {
        let table = LevelTable::parse("level,goal,time_limit_sec\n1,10,120\n2,15,110\n");
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.get(2),
            Some(&LevelInfo {
                level: 2,
                goal: 15,
                time_limit_sec: 110
            })
        );
    }

    #[test]
    fn test_malformed_rows_skipped() {
        let text = "level,goal,time_limit_sec\n1,10,120\nabc,5,5\n\n3,x,9\n4, 40 \r\n";
        let table = LevelTable::parse(text);
        let levels: Vec<u32> = table.rows().iter().map(|r| r.level).collect();
        assert_eq!(levels, vec![1, 4]);
        assert_eq!(table.get(4).map(|r| (r.goal, r.time_limit_sec)), Some((40, 0)));
    }

    #[test]
    fn test_missing_level() {
        let table = LevelTable::parse("level,goal,time_limit_sec\n1,10,120\n");
        assert!(table.get(2).is_none());
        assert!(LevelTable::default().get(1).is_none());
    }

    #[test]
    fn test_builtin_table() {
        let table = LevelTable::builtin();
        assert!(!table.is_empty());
        assert_eq!(table.get(1).map(|r| r.level), Some(1));
        // Goals never shrink from one level to the next
        for pair in table.rows().windows(2) {
            assert!(pair[0].goal <= pair[1].goal);
        }
    }
}
