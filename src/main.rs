use doushouqi::controller::{GameController, MoveResultType};
use doushouqi::game::pieces::Color;
use doushouqi::utils::cli::Command;

fn main() {
    env_logger::init();

    println!("doushouqi {} ({})", env!("CARGO_PKG_VERSION"), env!("GIT_HASH"));

    let mut controller = GameController::new();

    loop {
        match Command::receive() {
            Command::Quit => break,
            Command::Play => {
                controller.reset_board();
                controller.print();
            }
            Command::Board => controller.print(),
            Command::Move(notation) => {
                let result = controller.try_move_piece(notation.as_str());

                match result {
                    MoveResultType::Success => controller.print(),
                    _ => log::info!("{:?}", result),
                };
            }
            Command::Attacks(color_string) => match color_string.as_str() {
                "orange" => controller.print_attacks(Color::Orange),
                "yellow" => controller.print_attacks(Color::Yellow),
                _ => log::info!("unknown player '{}'", color_string),
            },
            Command::Hash => controller.print_hash(),
            Command::Invalid(input) => log::info!("unknown command '{}'", input.trim()),
        }
    }
}
