/// Hands out fresh record ids: decimal strings from a monotonically increasing
/// counter. Seeded above every numeric id already in use so generated ids
/// never collide with seed data.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn starting_at(next: u64) -> Self {
        Self { next: next.max(1) }
    }

    /// First id is one past the largest numeric id in `existing`; non-numeric
    /// ids (e.g. `"3-0"`) are ignored.
    pub fn after<'a, I>(existing: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let max = existing
            .into_iter()
            .filter_map(|id| id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self::starting_at(max + 1)
    }

    pub fn next_id(&mut self) -> String {
        let id = self.next;
        self.next += 1;
        id.to_string()
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}
