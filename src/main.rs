use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute, terminal,
};
use std::io::{self, stdout};
use std::time::{Duration, Instant};

use flappy_duo::audio::{Audio, Sfx};
use flappy_duo::config::{FPS, HEIGHT, WIDTH};
use flappy_duo::game::Game;
use flappy_duo::scene;
use flappy_duo::surface::{Rgb, Surface};
use flappy_duo::theme::Theme;

const USAGE: &str = "\
flappy-duo: one flappy game, two skins

USAGE:
    flappy-duo [--theme <name>] [--mute]

OPTIONS:
    --theme <name>   pick a skin (default: mouse)
    --list-themes    print the available skins and exit
    --mute           disable sound
    --help           show this help

KEYS:
    Space/Up/Enter   flap; restart once the run ends
    q / Esc          quit
";

fn main() -> Result<()> {
    let mut theme = Theme::mouse();
    let mut muted = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--theme" | "-t" => {
                let Some(name) = args.next() else {
                    eprintln!("--theme needs a value\n\n{USAGE}");
                    std::process::exit(2);
                };
                theme = match Theme::named(&name) {
                    Some(t) => t,
                    None => {
                        eprintln!(
                            "unknown theme {name:?}; themes: {}",
                            Theme::all_names().join(", ")
                        );
                        std::process::exit(2);
                    }
                };
            }
            "--mute" => muted = true,
            "--list-themes" => {
                for name in Theme::all_names() {
                    println!("{name}");
                }
                return Ok(());
            }
            "--help" | "-h" => {
                print!("{USAGE}");
                return Ok(());
            }
            other => {
                eprintln!("unknown option {other:?}\n\n{USAGE}");
                std::process::exit(2);
            }
        }
    }

    let audio = Audio::new(muted);

    terminal::enable_raw_mode().context("enable raw mode")?;
    let mut out = stdout();
    execute!(
        out,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        terminal::DisableLineWrap,
    )
    .context("enter alternate screen")?;

    let result = run(&mut out, &theme, &audio);

    // Restore the terminal whether the session ended by quit key or by
    // error, then report whichever failed.
    let restored = execute!(
        out,
        terminal::LeaveAlternateScreen,
        cursor::Show,
        terminal::EnableLineWrap,
    )
    .and_then(|_| terminal::disable_raw_mode());
    result?;
    restored.context("restore terminal")?;
    Ok(())
}

fn run(out: &mut io::Stdout, theme: &Theme, audio: &Audio) -> Result<()> {
    let start = Instant::now();
    let now_ms = || start.elapsed().as_millis() as u64;

    let (cols, rows) = terminal::size().context("query terminal size")?;
    let mut frame = Surface::new(cols as usize, rows as usize * 2, Rgb(0, 0, 0));
    // The playfield always renders at its native size and is scaled to
    // whatever the terminal offers.
    let mut canvas = Surface::new(WIDTH as usize, HEIGHT as usize, theme.palette.sky_top);

    let mut rng = rand::thread_rng();
    let mut game = Game::new(theme, now_ms(), &mut rng);
    let mut best: u32 = 0;

    let frame_dur = Duration::from_nanos(1_000_000_000 / FPS);

    loop {
        let frame_start = Instant::now();

        // Input
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => {
                        if game.active {
                            game.flap();
                            audio.play(Sfx::Flap);
                        } else {
                            game = Game::new(theme, now_ms(), &mut rng);
                        }
                    }
                    _ => {}
                },
                Event::Resize(c, r) => {
                    frame = Surface::new(c as usize, r as usize * 2, Rgb(0, 0, 0));
                }
                _ => {}
            }
        }

        // Update, watching the edges that cue sounds.
        let score_before = game.score;
        let was_active = game.active;
        game.update(now_ms(), &mut rng);
        if game.score > score_before {
            audio.play(Sfx::Score);
        }
        if was_active && !game.active {
            best = best.max(game.score);
            audio.play(Sfx::GameOver);
        }

        // Render: world at native size, downscale, HUD on the grid.
        scene::draw_world(&mut canvas, &game, theme);
        frame.blit_scaled(&canvas, Rgb(0, 0, 0));
        scene::draw_hud(&mut frame, game.score, &theme.palette);
        if !game.active {
            scene::draw_game_over(&mut frame, game.score, best, &theme.palette);
        }
        frame.present(out)?;

        // Frame pacing
        let elapsed = frame_start.elapsed();
        if elapsed < frame_dur {
            std::thread::sleep(frame_dur - elapsed);
        }
    }
}
