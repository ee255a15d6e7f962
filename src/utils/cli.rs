use std::io;

pub enum Command {
    Play,                   // play - reset the board and print it
    Board,                  // board - print the current board
    Move(String),           // move <fromto>, e.g. "move a3a4"
    Attacks(String),        // attacks <orange|yellow> - print the attack map
    Hash,                   // hash - print the position key and repetitions
    Quit,                   // quit the program

    Invalid(String), // placeholder for invalid commands so we can pattern match
}

impl Command {
    pub fn receive() -> Command {
        let mut input = String::new();

        io::stdin()
            .read_line(&mut input)
            .expect("Failed to read line");

        let parts = input.as_str().trim().split_whitespace().collect::<Vec<_>>();

        match parts.as_slice() {
            ["play"] => Command::Play,
            ["board"] => Command::Board,
            ["move", notation] => Command::Move(notation.to_string()),
            ["attacks", color] => Command::Attacks(color.to_string()),
            ["hash"] => Command::Hash,
            ["quit"] => Command::Quit,
            _ => Command::Invalid(input),
        }
    }
}
