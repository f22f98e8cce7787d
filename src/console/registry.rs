//! Static command registry
//!
//! Every verb maps either directly to a command or to a table of nouns, with
//! an optional default noun used when the second token is not recognized.
//! Resolution checks arity up front, so handlers always receive exactly the
//! arguments they declare.

use crate::error::{AppError, AppResult};

/// The three kinds of records the console manages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Entry,
    Booking,
    Request,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add(RecordKind),
    Edit(RecordKind),
    Remove(RecordKind),
    View(RecordKind),
    Commit,
    Clear,
    Set,
}

/// Number of arguments a command takes after its verb (and noun)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    None,
    Exactly(usize),
    AtLeast(usize),
}

impl Arity {
    fn accepts(self, count: usize) -> bool {
        match self {
            Arity::None => count == 0,
            Arity::Exactly(n) => count == n,
            Arity::AtLeast(n) => count >= n,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub action: Action,
    pub arity: Arity,
    /// Argument shape shown in help and syntax errors
    pub args: &'static str,
    pub description: &'static str,
}

#[derive(Debug)]
pub enum Slot {
    Direct(CommandSpec),
    Nested {
        nouns: &'static [(&'static str, CommandSpec)],
        default: Option<&'static str>,
    },
}

/// Outcome of looking up a tokenized line
#[derive(Debug, PartialEq, Eq)]
pub enum Resolution<'a> {
    Command { spec: CommandSpec, args: Vec<&'a str> },
    UnknownVerb(&'a str),
    UnknownNoun { verb: &'a str, noun: &'a str },
    Empty,
}

const fn spec(action: Action, arity: Arity, args: &'static str, description: &'static str) -> CommandSpec {
    CommandSpec {
        action,
        arity,
        args,
        description,
    }
}

const ADD: &[(&str, CommandSpec)] = &[
    ("entry", spec(Action::Add(RecordKind::Entry), Arity::Exactly(1), "<name>", "add an entry, asking for its location and count")),
    ("booking", spec(Action::Add(RecordKind::Booking), Arity::None, "", "book one unit of an entry")),
    ("request", spec(Action::Add(RecordKind::Request), Arity::Exactly(1), "<material>", "add a material request")),
];

const EDIT: &[(&str, CommandSpec)] = &[
    ("entry", spec(Action::Edit(RecordKind::Entry), Arity::Exactly(2), "<filter> <locationText|locationImg|available|booked>", "change one attribute of an entry")),
    ("booking", spec(Action::Edit(RecordKind::Booking), Arity::Exactly(2), "<filter> <bookedBy|bookInfo>", "change one attribute of a booking")),
    ("request", spec(Action::Edit(RecordKind::Request), Arity::Exactly(2), "<filter> <material|requestBy|info>", "change one attribute of a request")),
];

const REMOVE: &[(&str, CommandSpec)] = &[
    ("entry", spec(Action::Remove(RecordKind::Entry), Arity::Exactly(1), "<filter>", "remove an entry and all of its bookings")),
    ("booking", spec(Action::Remove(RecordKind::Booking), Arity::Exactly(1), "<filter>", "remove a booking, freeing its unit")),
    ("request", spec(Action::Remove(RecordKind::Request), Arity::Exactly(1), "<filter>", "remove a material request")),
];

const VIEW: &[(&str, CommandSpec)] = &[
    ("entries", spec(Action::View(RecordKind::Entry), Arity::None, "", "page through entries")),
    ("bookings", spec(Action::View(RecordKind::Booking), Arity::None, "", "page through bookings")),
    ("requests", spec(Action::View(RecordKind::Request), Arity::None, "", "page through material requests")),
];

const COMMANDS: &[(&str, Slot)] = &[
    ("add", Slot::Nested { nouns: ADD, default: None }),
    ("edit", Slot::Nested { nouns: EDIT, default: None }),
    ("remove", Slot::Nested { nouns: REMOVE, default: None }),
    ("view", Slot::Nested { nouns: VIEW, default: Some("entries") }),
    ("commit", Slot::Direct(spec(Action::Commit, Arity::None, "", "save every staged change"))),
    ("clear", Slot::Direct(spec(Action::Clear, Arity::None, "", "clear the terminal"))),
    ("set", Slot::Direct(spec(Action::Set, Arity::AtLeast(2), "<key> <value>", "publish a value to the web service"))),
];

#[derive(Debug, Clone, Copy)]
pub struct Registry {
    commands: &'static [(&'static str, Slot)],
}

impl Default for Registry {
    fn default() -> Self {
        Self { commands: COMMANDS }
    }
}

impl Registry {
    /// Look up a whitespace-tokenized line. The verb is matched
    /// case-insensitively, nouns exactly.
    pub fn resolve<'a>(&self, tokens: &[&'a str]) -> AppResult<Resolution<'a>> {
        let Some((&verb, rest)) = tokens.split_first() else {
            return Ok(Resolution::Empty);
        };

        let Some((name, slot)) = self
            .commands
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(verb))
        else {
            return Ok(Resolution::UnknownVerb(verb));
        };

        match slot {
            Slot::Direct(spec) => checked(spec, name, rest),
            Slot::Nested { nouns, default } => {
                let default = *default;
                let matched = rest
                    .first()
                    .and_then(|noun| nouns.iter().find(|(n, _)| n == noun));

                if let Some((noun, spec)) = matched {
                    return checked(spec, &format!("{name} {noun}"), &rest[1..]);
                }

                let default_spec = default.and_then(|d| nouns.iter().find(|(n, _)| *n == d));
                match (default_spec, rest.first()) {
                    (Some((noun, spec)), first) => {
                        // An unrecognized noun still occupies the noun position
                        let args = if first.is_some() { &rest[1..] } else { rest };
                        checked(spec, &format!("{name} {noun}"), args)
                    }
                    (None, Some(&noun)) => Ok(Resolution::UnknownNoun { verb, noun }),
                    (None, None) => {
                        let choices: Vec<&str> = nouns.iter().map(|(n, _)| *n).collect();
                        Err(AppError::Syntax(format!("{} {}", name, choices.join("|"))))
                    }
                }
            }
        }
    }

    /// Rows of the help table: command, arguments, description
    pub fn help_rows(&self) -> Vec<Vec<String>> {
        let mut rows = Vec::new();
        for (name, slot) in self.commands {
            match slot {
                Slot::Direct(spec) => rows.push(vec![
                    name.to_string(),
                    spec.args.to_string(),
                    spec.description.to_string(),
                ]),
                Slot::Nested { nouns, default } => {
                    for (noun, spec) in nouns.iter() {
                        let description = if *default == Some(*noun) {
                            format!("{} (default)", spec.description)
                        } else {
                            spec.description.to_string()
                        };
                        rows.push(vec![format!("{name} {noun}"), spec.args.to_string(), description]);
                    }
                }
            }
        }
        rows
    }
}

fn checked<'a>(spec: &CommandSpec, usage: &str, args: &[&'a str]) -> AppResult<Resolution<'a>> {
    if !spec.arity.accepts(args.len()) {
        let usage = if spec.args.is_empty() {
            usage.to_string()
        } else {
            format!("{} {}", usage, spec.args)
        };
        return Err(AppError::Syntax(usage));
    }

    Ok(Resolution::Command {
        spec: *spec,
        args: args.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(line: &str) -> AppResult<Resolution<'_>> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        Registry::default().resolve(&tokens)
    }

    fn action(line: &str) -> (Action, Vec<String>) {
        match resolve(line).unwrap() {
            Resolution::Command { spec, args } => {
                (spec.action, args.into_iter().map(String::from).collect())
            }
            other => panic!("expected a command, got {other:?}"),
        }
    }

    #[test]
    fn test_nested_noun() {
        assert_eq!(
            action("edit entry Tri available"),
            (
                Action::Edit(RecordKind::Entry),
                vec!["Tri".to_string(), "available".to_string()]
            )
        );
        assert_eq!(action("add booking").0, Action::Add(RecordKind::Booking));
    }

    #[test]
    fn test_set_keeps_every_word() {
        assert_eq!(
            action("set message back at noon"),
            (
                Action::Set,
                vec!["message", "back", "at", "noon"].into_iter().map(String::from).collect()
            )
        );
    }

    #[test]
    fn test_verb_is_case_insensitive() {
        assert_eq!(action("COMMIT").0, Action::Commit);
        assert_eq!(action("View bookings").0, Action::View(RecordKind::Booking));
    }

    #[test]
    fn test_noun_is_case_sensitive() {
        assert!(matches!(
            resolve("remove Entry x").unwrap(),
            Resolution::UnknownNoun { noun: "Entry", .. }
        ));
    }

    #[test]
    fn test_default_noun() {
        assert_eq!(action("view").0, Action::View(RecordKind::Entry));
        assert_eq!(action("view everything").0, Action::View(RecordKind::Entry));
    }

    #[test]
    fn test_unknown_noun_without_default() {
        assert_eq!(
            resolve("add widget").unwrap(),
            Resolution::UnknownNoun {
                verb: "add",
                noun: "widget"
            }
        );
    }

    #[test]
    fn test_missing_noun_is_syntax_error() {
        match resolve("remove") {
            Err(AppError::Syntax(usage)) => assert_eq!(usage, "remove entry|booking|request"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_unknown_verb() {
        assert_eq!(resolve("frobnicate now").unwrap(), Resolution::UnknownVerb("frobnicate"));
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(resolve("   ").unwrap(), Resolution::Empty);
    }

    #[test]
    fn test_arity_mismatch() {
        match resolve("edit entry Tripod") {
            Err(AppError::Syntax(usage)) => {
                assert_eq!(usage, "edit entry <filter> <locationText|locationImg|available|booked>")
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(resolve("commit now"), Err(AppError::Syntax(_))));
        assert!(matches!(resolve("add entry"), Err(AppError::Syntax(_))));
        match resolve("set message") {
            Err(AppError::Syntax(usage)) => assert_eq!(usage, "set <key> <value>"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_help_rows_cover_every_command() {
        let rows = Registry::default().help_rows();
        assert_eq!(rows.len(), 15);
        assert!(rows.iter().any(|r| r[0] == "view entries" && r[2].ends_with("(default)")));
    }
}
