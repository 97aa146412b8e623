use crate::option::SelectableOption;

#[derive(Clone, Copy)]
#[derive(Debug, PartialEq, Eq)]
pub enum YesNoOption {
    Yes,
    No
}

impl SelectableOption for YesNoOption {
    fn all() -> Vec<Self> {
        vec![YesNoOption::Yes, YesNoOption::No]
    }

    fn display_name(&self) -> String {
        match self {
            YesNoOption::Yes => String::from("YES"),
            YesNoOption::No => String::from("NO")
        }
    }

    fn default_selection() -> Option<Self> {
        Some(YesNoOption::Yes)
    }
}
