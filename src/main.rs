use anyhow::Result;
use dotenvy::dotenv;
use log::{info, warn};
use tokio::io::{AsyncBufReadExt, BufReader};

use impostor::utils::{config::CONFIG, logger::init_logger};
use impostor::SessionController;

const HELP: &str = "commands: add NAME | remove NAME | start | reveal N | round | shuffle | first | json | reset | quit";

#[tokio::main]
async fn main() -> Result<()> {
    // 環境変数をロード
    if let Err(e) = dotenv() {
        eprintln!("Warning: .env file not loaded: {}", e);
    }

    init_logger(CONFIG.verbose_logging);

    let controller = SessionController::from_config(&CONFIG);

    // 状態が変わるたびに再描画する
    let mut updates = controller.subscribe().await;
    let renderer = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let state = updates.borrow_and_update().clone();
            println!("{}", state);
        }
    });

    println!("Impostor - {}", HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let (command, arg) = match line.split_once(' ') {
            Some((command, arg)) => (command, arg.trim()),
            None => (line, ""),
        };

        match command {
            "" => continue,
            "add" => {
                controller.add_participant(arg).await;
            }
            "remove" => {
                controller.remove_participant(arg).await;
            }
            "start" => {
                if let Err(e) = controller.start_game().await {
                    println!("{}", e);
                }
            }
            "round" => {
                if let Err(e) = controller.new_round().await {
                    println!("{}", e);
                }
            }
            "reveal" => match arg.parse::<usize>() {
                Ok(index) => {
                    controller.toggle_reveal(index).await;
                }
                Err(_) => println!("reveal expects a card number"),
            },
            "shuffle" => {
                controller.shuffle_first_player().await;
            }
            "first" => {
                controller.toggle_first_player_visibility().await;
            }
            "json" => {
                let state = controller.snapshot().await;
                println!("{}", serde_json::to_string_pretty(&state)?);
            }
            "reset" => controller.reset_session().await,
            "quit" | "exit" => break,
            other => {
                warn!("unknown command: {}", other);
                println!("{}", HELP);
            }
        }
    }

    controller.reset_session().await;
    drop(controller);
    renderer.abort();
    info!("bye");
    Ok(())
}
