//! Rollcall demo - walks one attendance marking flow end to end

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rollcall::attendance::{MarkingSession, ReviewQueue};
use rollcall::capture::{SimulatedCamera, SimulatedLocation};
use rollcall::config::CaptureConfig;
use rollcall::models::Student;

#[derive(Parser, Debug)]
#[command(name = "rollcall", about = "Attendance capture and approval demo")]
struct Args {
    /// Student name
    #[arg(long, default_value = "Alice Johnson")]
    name: String,

    /// Roll number
    #[arg(long, default_value = "101")]
    roll: String,

    /// Simulated latitude
    #[arg(long, default_value_t = 27.7172)]
    latitude: f64,

    /// Simulated longitude
    #[arg(long, default_value_t = 85.3240)]
    longitude: f64,

    /// Coordinate display precision (4-6)
    #[arg(long, default_value_t = 4)]
    precision: u8,

    /// Simulate a denied camera permission
    #[arg(long)]
    deny_camera: bool,

    /// Reject the request instead of approving it
    #[arg(long)]
    reject: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rollcall=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let student = Student::new(&args.name, &args.roll);
    let camera = if args.deny_camera {
        SimulatedCamera::denying()
    } else {
        SimulatedCamera::new()
    };
    let location = SimulatedLocation::at(args.latitude, args.longitude);

    let queue = ReviewQueue::new();
    let mut session = MarkingSession::with_config(
        student,
        camera,
        location,
        CaptureConfig::new(args.precision),
    );

    // Student side: capture selfie and position, then submit
    let (photo, position) = session.acquire_all().await;
    match (&photo, &position) {
        (Ok(photo), Ok(position)) => {
            tracing::info!(photo = photo.as_str(), %position, "capture complete");
        }
        _ => {
            tracing::warn!("capture incomplete, submission will be refused");
        }
    }

    match session.submit(&queue).await {
        Ok(request) => {
            tracing::info!(request_id = %request.id, "submitted for approval");
        }
        Err(err) => {
            tracing::warn!(%err, "submission refused");
            return Ok(());
        }
    }

    // Teacher side: review the pending queue
    for request in queue.list().await {
        println!(
            "pending: {} (roll {}) at {} on {} {}",
            request.student_name,
            request.roll_number,
            request.location,
            request.date(),
            request.time()
        );

        let resolved = if args.reject {
            queue.reject(request.id).await
        } else {
            queue.approve(request.id).await
        };
        if let Some(resolved) = resolved {
            let verdict = if args.reject { "rejected" } else { "approved" };
            println!("{}: {}", verdict, resolved.student_name);
        }
    }

    Ok(())
}
