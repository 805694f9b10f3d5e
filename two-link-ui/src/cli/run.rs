use super::{session::Session, AnyResult, Logger};
use indicatif::{ProgressBar, ProgressStyle};
use std::{io::Write, path::PathBuf, time::Duration};
use two_link::{animate, Error, Frame, NoDelay, Scheduler};

#[derive(clap::Args)]
pub(super) struct RunCfg {
    /// Session file (in RON format)
    file: PathBuf,
    /// Override the number of animation steps
    #[clap(long)]
    steps: Option<usize>,
    /// Override the delay of each step in milliseconds
    #[clap(long)]
    delay: Option<u64>,
    /// Play the animation without any delay
    #[clap(long)]
    no_delay: bool,
    /// Write the animation frames to a CSV file
    #[clap(long)]
    csv: Option<PathBuf>,
}

pub(super) fn run<W: Write>(logger: &mut Logger<W>, cfg: RunCfg) -> AnyResult {
    let RunCfg { file, steps, delay, no_delay, csv } = cfg;
    let mut session = Session::load(&file)?;
    if let Some(steps) = steps {
        session.steps = steps;
    }
    if let Some(delay) = delay {
        session.delay = delay;
    }
    let mut sleep = |d: Duration| std::thread::sleep(d);
    let mut skip = NoDelay;
    let scheduler: &mut dyn Scheduler = if no_delay { &mut skip } else { &mut sleep };
    let frames = play(logger, &session, scheduler, true)?;
    if let Some(path) = csv {
        std::fs::write(&path, two_link::csv::dump_frames(&frames)?)?;
        log::info!("frames written to {}", path.display());
    }
    Ok(())
}

/// Play a session, return the played frames.
pub(super) fn play<W: Write>(
    logger: &mut Logger<W>,
    session: &Session,
    scheduler: &mut dyn Scheduler,
    progress: bool,
) -> AnyResult<Vec<Frame>> {
    let arm = session.arm()?;
    logger.title("arm")?;
    logger.log(&arm)?;
    logger.title("workspace")?;
    logger.log(&arm.bounds())?;
    logger.gap()?;

    let pose = arm.pose(session.start)?;
    logger.title("pose")?;
    logger.log(&pose)?;
    logger.gap()?;

    logger.title("move")?;
    logger.entry("target", &session.target)?;
    match arm.plan_move(&pose, session.target) {
        Ok(check) => logger.log(&check)?,
        Err(e) => {
            if let Error::InvalidMove { intersections } = &e {
                logger.entry("valid", &false)?;
                logger.entry("intersections", intersections)?;
            }
            logger.flush()?;
            return Err(e.into());
        }
    }
    logger.gap()?;
    logger.flush()?;

    let motion = arm.motion(&pose, session.target, session.steps);
    let pb = if progress {
        const STYLE: &str = "{elapsed_precise} {wide_bar} {pos}/{len}";
        let pb = ProgressBar::new(session.steps as u64);
        pb.set_style(ProgressStyle::with_template(STYLE)?);
        pb
    } else {
        ProgressBar::hidden()
    };
    let mut frames = Vec::with_capacity(session.steps);
    scheduler.wait(session.pause());
    let report = animate(pose, motion, session.delay(), scheduler, |frame| {
        pb.set_position(frame.step as u64);
        frames.push(*frame);
        true
    });
    pb.finish_and_clear();
    logger.title("animation")?;
    logger.log(&report)?;
    logger.flush()?;
    if !report.finished {
        log::warn!("the arm stopped at step {}", report.frames);
    }
    Ok(frames)
}
