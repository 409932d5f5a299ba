//! Headless board client
//!
//! Drives [`ChessClient`] against an HTTP authority and prints the board as
//! text after every change. Moves are typed as coordinate pairs (`e2e4`).

use anyhow::{Context, Result, bail};
use chessboard_client::core::logging::init_logging;
use chessboard_client::game::{PieceColor, Position};
use chessboard_client::rendering::TextSink;
use chessboard_client::rendering::board::from_notation;
use chessboard_client::{
    Authority, ChessClient, ClickOutcome, ClientSettings, ColorPreference, HeadlessSurface, HttpAuthority,
    NewGameConfig, SeatOccupant, Seats,
};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser, Debug)]
#[command(name = "chessboard-client", version, about = "Play against a chess authority from the terminal")]
struct Cli {
    /// Authority base URL, overrides the settings file
    #[arg(long)]
    server: Option<String>,

    /// Move animation duration in milliseconds
    #[arg(long)]
    animation_ms: Option<u64>,

    /// Write the effective settings back to the settings file
    #[arg(long)]
    save_settings: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the automated players the authority offers
    Bots,
    /// Watch two automated players
    Exhibition {
        #[arg(long)]
        white: String,
        #[arg(long)]
        black: String,
    },
    /// Play a bot, reading moves like `e2e4` from stdin
    Play {
        /// white, black or random
        #[arg(long, default_value = "white")]
        color: String,
        #[arg(long)]
        bot: Option<String>,
    },
    /// Continue an existing session
    Resume {
        #[arg(long)]
        session: String,
        /// `human` or a bot id
        #[arg(long, default_value = "human")]
        white: String,
        #[arg(long, default_value = "human")]
        black: String,
    },
}

type Client = ChessClient<HttpAuthority, HeadlessSurface>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_logging("info");
    let cli = Cli::parse();

    let mut settings = ClientSettings::load();
    if let Some(server) = cli.server {
        settings.server_url = server;
    }
    if let Some(ms) = cli.animation_ms {
        settings.animation_ms = ms;
    }
    if cli.save_settings {
        let path = settings.save().context("saving settings")?;
        tracing::info!("[SETTINGS] Saved to {}", path.display());
    }

    let authority = HttpAuthority::new(&settings.server_url)?;
    let surface = HeadlessSurface::new(settings.board_size_px);
    let client = ChessClient::new(authority, surface, settings);

    match cli.command {
        Command::Bots => {
            let bots = client.authority().list_bots().await?;
            for bot in bots {
                println!("{:<20} {}", bot.id, bot.label());
                if let Some(description) = &bot.description {
                    println!("{:<20} {}", "", description);
                }
            }
        }
        Command::Exhibition { white, black } => {
            client
                .start_new_game(&NewGameConfig::Exhibition {
                    white_bot: white,
                    black_bot: black,
                })
                .await?;
            client.begin_play().await?;
            print_board(&client);
        }
        Command::Play { color, bot } => {
            let Some(human) = ColorPreference::parse(&color) else {
                bail!("unknown color {color:?}, expected white, black or random");
            };
            client
                .start_new_game(&NewGameConfig::VsBot { human, bot })
                .await?;
            client.begin_play().await?;
            play_from_stdin(&client).await?;
        }
        Command::Resume {
            session,
            white,
            black,
        } => {
            let seats = Seats {
                white: SeatOccupant::parse(&white),
                black: SeatOccupant::parse(&black),
            };
            let interactive = seats.human_color().is_some();
            client.resume(&session, seats).await?;
            if interactive {
                play_from_stdin(&client).await?;
            } else {
                print_board(&client);
            }
        }
    }
    Ok(())
}

async fn play_from_stdin(client: &Client) -> Result<()> {
    print_board(client);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }
        let (from, to) = match parse_move(line) {
            Ok(squares) => squares,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };

        let renderer = client.renderer();
        let first = client.click_square(renderer.key_for(from)).await;
        if !matches!(first, ClickOutcome::Selected { .. }) {
            eprintln!("Cannot select {}: {:?}", &line[..2], first);
            continue;
        }
        let second = client.click_square(renderer.key_for(to)).await;
        if !matches!(second, ClickOutcome::MoveSubmitted { .. }) {
            eprintln!("Move not played: {:?}", second);
        }
        print_board(client);

        if client
            .surface()
            .text(TextSink::GameOverTitle)
            .is_some_and(|title| !title.is_empty())
        {
            break;
        }
    }
    Ok(())
}

fn parse_move(input: &str) -> Result<(Position, Position)> {
    if input.len() != 4 || !input.is_ascii() {
        bail!("expected a move like e2e4, got {input:?}");
    }
    Ok((from_notation(&input[..2])?, from_notation(&input[2..])?))
}

fn print_board(client: &Client) {
    let surface = client.surface();
    let renderer = client.renderer();
    let rotated = renderer.orientation().is_rotated();
    let ranks: Vec<u8> = if rotated {
        (1..=8).collect()
    } else {
        (1..=8).rev().collect()
    };
    let files = if rotated { "h g f e d c b a" } else { "a b c d e f g h" };

    for (row, line) in surface.to_ascii().lines().enumerate() {
        println!("{} {}", ranks[row], line);
    }
    println!("  {}", files);

    let text = |sink| surface.text(sink).unwrap_or("");
    println!("{}", text(TextSink::Status));
    let moves = text(TextSink::MoveList);
    if !moves.is_empty() {
        println!("{}", moves);
    }
    let title = text(TextSink::GameOverTitle);
    if !title.is_empty() {
        println!("{} {}", title, text(TextSink::GameOverDetails));
    }
    if let Some(color) = surface.active_seat() {
        let marker = match color {
            PieceColor::White => "White to move",
            PieceColor::Black => "Black to move",
        };
        println!("{}", marker);
    }
}
