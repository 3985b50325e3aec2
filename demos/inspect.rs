/// magnetite-nn · prediction inspector
///
/// Trains a small network on a slice of MNIST, then serves its test-set
/// predictions over HTTP so they can be browsed one at a time:
///
///   GET /comparison/<n>       JSON metadata for test example n
///   GET /comparison/<n>.png   the example rendered as a 28x28 PNG
///   GET /quit                 shut the server down
///
/// Run with:
///   cargo run --example inspect --release -- <data-dir>

use std::env;
use std::io::Cursor;
use std::process;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use tiny_http::{Header, Method, Response, Server};

use magnetite_nn::data::load_data_wrapper;
use magnetite_nn::{sgd, Inspector, Network, Result, Sgd, TrainConfig};

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

fn bytes_response(body: Vec<u8>, content_type: &str, status: u16) -> Response<Cursor<Vec<u8>>> {
    let len = body.len();
    Response::new(
        tiny_http::StatusCode(status),
        vec![Header::from_bytes(b"Content-Type", content_type.as_bytes()).unwrap()],
        Cursor::new(body),
        Some(len),
        None,
    )
}

fn not_found() -> Response<Cursor<Vec<u8>>> {
    bytes_response(b"404 Not Found".to_vec(), "text/plain", 404)
}

/// Splits `/comparison/<n>` and `/comparison/<n>.png` into the example index
/// and whether the PNG form was requested.
fn parse_comparison_url(url: &str) -> Option<(usize, bool)> {
    let rest = url.strip_prefix("/comparison/")?;
    match rest.strip_suffix(".png") {
        Some(index) => index.parse().ok().map(|n| (n, true)),
        None => rest.parse().ok().map(|n| (n, false)),
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let data_dir = match env::args().nth(1) {
        Some(dir) => dir,
        None => {
            eprintln!("usage: cargo run --example inspect --release -- <data-dir>");
            process::exit(2);
        }
    };

    println!("Loading MNIST data from {data_dir}...");
    let (mut training, _validation, test) = load_data_wrapper(&data_dir)?;
    // A slice of the training set is enough for a recognisable classifier and
    // keeps server startup short.
    training.truncate(10_000);

    let mut rng = StdRng::from_entropy();
    let mut network = Network::new(vec![784, 30, 10], &mut rng)?;
    let optimizer = Sgd::new(3.0)?;
    let config = TrainConfig::new(1, 10);

    println!(
        "Training a quick 784 -> 30 -> 10 network ({} examples, {} epoch)...",
        training.len(),
        config.epochs
    );
    sgd(
        &mut network,
        &mut training,
        Some(&test),
        &optimizer,
        &config,
        &mut rng,
    )?;

    let addr = "127.0.0.1:7878";
    let server = Server::http(addr).expect("failed to bind HTTP server");
    println!("\nServing {} test predictions on http://{addr}", test.len());
    println!("  GET /comparison/<n>       JSON metadata");
    println!("  GET /comparison/<n>.png   rendered image");
    println!("  GET /quit                 shut down");

    for request in server.incoming_requests() {
        if request.method() != &Method::Get {
            let _ = request.respond(not_found());
            continue;
        }
        let url = request.url().to_owned();

        if url == "/quit" {
            let _ = request.respond(bytes_response(
                b"shutting down\n".to_vec(),
                "text/plain",
                200,
            ));
            break;
        }

        let response = match parse_comparison_url(&url) {
            Some((n, as_png)) if n < test.len() => {
                let comparison = Inspector::new(&network, &test[n..], 28, 28)?
                    .next()
                    .expect("slice is non-empty")?;
                if as_png {
                    bytes_response(comparison.png_bytes()?, "image/png", 200)
                } else {
                    let body = json!({
                        "index": n,
                        "truth": comparison.truth,
                        "predicted": comparison.predicted,
                        "caption": comparison.caption(),
                    });
                    bytes_response(body.to_string().into_bytes(), "application/json", 200)
                }
            }
            _ => not_found(),
        };
        let _ = request.respond(response);
    }

    Ok(())
}
