#[derive(Eq, Hash, PartialEq)]
#[derive(Debug)]
#[derive(Clone)]
pub struct UsageCommand  {
    pub keys : String,
    pub description : String
}

impl UsageCommand {
    pub fn new(keys: &str, description: &str) -> Self {
        UsageCommand { keys: keys.to_string(), description: description.to_string() }
    }

    fn describe_usage(&self) -> String {
        format!("{} - {}", self.keys, self.description)
    }
}

#[derive(Clone)]
#[derive(Debug)]
pub struct UsageLine {
    pub commands : Vec<UsageCommand>
}

impl UsageLine {
    pub const fn new(commands: Vec<UsageCommand>) -> Self {
        UsageLine { commands }
    }

    pub fn describe(&self) -> String {
        self.commands.iter()
            .map(|c| c.describe_usage())
            .collect::<Vec<String>>()
            .join(", ")
    }
}
