use crate::models::Todo;

/// Which slice of the list the user is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Done,
}

impl Filter {
    pub fn cycle(self) -> Self {
        match self {
            Filter::All => Filter::Active,
            Filter::Active => Filter::Done,
            Filter::Done => Filter::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Done => "Done",
        }
    }

    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !todo.done,
            Filter::Done => todo.done,
        }
    }
}

/// Count of tasks still open.
pub fn remaining(todos: &[Todo]) -> usize {
    todos.iter().filter(|t| !t.done).count()
}

/// The visible projection: the filtered subset, with open tasks before done
/// ones. Order within each group is stable, so it stays insertion order.
pub fn visible(todos: &[Todo], filter: Filter) -> Vec<&Todo> {
    let mut result: Vec<&Todo> = todos
        .iter()
        .filter(|t| filter.matches(t) && !t.done)
        .collect();
    result.extend(todos.iter().filter(|t| filter.matches(t) && t.done));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Todo> {
        let mut todos = vec![
            Todo::new(4, "D".to_string(), None),
            Todo::new(3, "C".to_string(), None),
            Todo::new(2, "B".to_string(), None),
            Todo::new(1, "A".to_string(), None),
        ];
        todos[1].done = true; // C
        todos[3].done = true; // A
        todos
    }

    #[test]
    fn remaining_counts_open_tasks() {
        assert_eq!(remaining(&sample()), 2);
        assert_eq!(remaining(&[]), 0);
    }

    #[test]
    fn filters_are_sound_and_complete() {
        let todos = sample();
        for filter in [Filter::All, Filter::Active, Filter::Done] {
            let shown = visible(&todos, filter);
            assert!(shown.iter().all(|t| filter.matches(t)));
            let expected = todos.iter().filter(|t| filter.matches(t)).count();
            assert_eq!(shown.len(), expected);
        }
    }

    #[test]
    fn open_tasks_come_before_done_tasks() {
        let todos = sample();
        let shown = visible(&todos, Filter::All);
        let first_done = shown.iter().position(|t| t.done).unwrap();
        assert!(shown[first_done..].iter().all(|t| t.done));
    }

    #[test]
    fn ordering_is_stable_within_each_group() {
        let todos = sample();
        let shown = visible(&todos, Filter::All);
        let texts: Vec<_> = shown.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["D", "B", "C", "A"]);
    }

    #[test]
    fn cycle_walks_all_active_done() {
        assert_eq!(Filter::All.cycle(), Filter::Active);
        assert_eq!(Filter::Active.cycle(), Filter::Done);
        assert_eq!(Filter::Done.cycle(), Filter::All);
    }
}
