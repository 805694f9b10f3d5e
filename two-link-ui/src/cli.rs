use self::logger::Logger;
use two_link::{Direction, TwoLink};

mod logger;
mod run;
mod session;

const APP_NAME: &str = env!("CARGO_BIN_NAME");

pub(crate) type AnyResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

#[derive(clap::Parser)]
#[clap(name = APP_NAME, version, author, about)]
pub(crate) struct Entry {
    #[clap(subcommand)]
    cmd: Cmd,
}

#[derive(clap::Subcommand)]
enum Cmd {
    /// Run a session file: solve, check the move, then play the animation
    Run(run::RunCfg),
    /// Solve the elbow of an end-effector target
    Solve {
        #[clap(flatten)]
        arm: ArmCfg,
        /// End-effector target `x,y`
        #[clap(long, value_parser = parse_point, allow_hyphen_values = true)]
        at: [f64; 2],
    },
    /// Check a straight move of the end-effector
    Check {
        #[clap(flatten)]
        arm: ArmCfg,
        /// Current end-effector position `x,y`
        #[clap(long, value_parser = parse_point, allow_hyphen_values = true)]
        from: [f64; 2],
        /// Target end-effector position `x,y`
        #[clap(long, value_parser = parse_point, allow_hyphen_values = true)]
        to: [f64; 2],
    },
    /// Print the workspace radius
    Bounds {
        #[clap(flatten)]
        arm: ArmCfg,
    },
}

#[derive(clap::Args)]
struct ArmCfg {
    /// Length of the first link
    #[clap(long)]
    l1: f64,
    /// Length of the second link
    #[clap(long)]
    l2: f64,
    /// Turn sense of the elbow (cw or ccw)
    #[clap(long, default_value = "ccw")]
    dir: Direction,
    /// Width of the drawing area
    #[clap(long, default_value_t = session::AREA[0])]
    width: f64,
    /// Height of the drawing area
    #[clap(long, default_value_t = session::AREA[1])]
    height: f64,
}

impl ArmCfg {
    /// Build the arm, the arm must fit in the drawing area.
    fn arm(&self) -> AnyResult<TwoLink> {
        let arm = TwoLink::new(self.l1, self.l2, self.dir)?;
        arm.check_area(self.width, self.height)?;
        Ok(arm)
    }
}

impl Entry {
    pub(crate) fn main() -> AnyResult {
        let entry = <Self as clap::Parser>::parse_from(wild::args());
        let mut stdout = std::io::stdout().lock();
        let mut logger = Logger::new(&mut stdout);
        match entry.cmd {
            Cmd::Run(cfg) => run::run(&mut logger, cfg),
            Cmd::Solve { arm, at } => solve(&mut logger, &arm.arm()?, at),
            Cmd::Check { arm, from, to } => check(&mut logger, &arm.arm()?, from, to),
            Cmd::Bounds { arm } => {
                logger.title("workspace")?;
                logger.log(&arm.arm()?.bounds())?;
                Ok(logger.flush()?)
            }
        }
    }
}

fn parse_point(s: &str) -> Result<[f64; 2], String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expect `x,y`, got `{s}`"))?;
    let parse = |v: &str| v.trim().parse::<f64>().map_err(|e| format!("{e}: `{v}`"));
    Ok([parse(x)?, parse(y)?])
}

pub(crate) fn solve<W: std::io::Write>(
    logger: &mut Logger<W>,
    arm: &TwoLink,
    target: [f64; 2],
) -> AnyResult {
    let pair = arm.candidates(target)?;
    logger.title("candidates")?;
    logger.entry("a", &pair.a)?;
    logger.entry("b", &pair.b)?;
    let pose = arm.pose(target)?;
    logger.title("pose")?;
    logger.entry("dir", &arm.dir)?;
    logger.log(&pose)?;
    Ok(logger.flush()?)
}

pub(crate) fn check<W: std::io::Write>(
    logger: &mut Logger<W>,
    arm: &TwoLink,
    from: [f64; 2],
    to: [f64; 2],
) -> AnyResult {
    // The current position must be a valid pose as well
    let pose = arm.pose(from)?;
    let res = arm.plan_move(&pose, to);
    logger.title("move")?;
    logger.entry("from", &from)?;
    logger.entry("to", &to)?;
    match &res {
        Ok(check) => logger.log(check)?,
        Err(two_link::Error::InvalidMove { intersections }) => {
            logger.entry("valid", &false)?;
            logger.entry("intersections", intersections)?;
        }
        Err(_) => (),
    }
    logger.flush()?;
    res.map(|_| ()).map_err(Into::into)
}
