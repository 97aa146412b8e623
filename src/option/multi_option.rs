use crate::option::SelectableOption;

#[derive(Clone, Copy)]
#[derive(Debug, PartialEq, Eq)]
pub enum MultiOption {
    Option1,
    Option2,
    Option3,
    Option4
}

impl SelectableOption for MultiOption {
    fn all() -> Vec<Self> {
        vec![MultiOption::Option1, MultiOption::Option2, MultiOption::Option3, MultiOption::Option4]
    }

    // Labelled by their own names
    fn display_name(&self) -> String {
        let name = match self {
            MultiOption::Option1 => "option1",
            MultiOption::Option2 => "option2",
            MultiOption::Option3 => "option3",
            MultiOption::Option4 => "option4"
        };
        name.to_string()
    }
}
