use rouille::{router, Request, Response};
use serde::Serialize;

use crate::config::GridConfig;
use crate::grid::Grid;
use crate::rover::Rover;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

fn commands_param(request: &Request) -> Result<String, Response> {
    request.get_param("commands").ok_or_else(|| {
        Response::json(&ErrorBody {
            error: "missing `commands` query parameter".to_string(),
        })
        .with_status_code(400)
    })
}

/// Routes one request. Every request drives its own rover over `grid`.
pub fn handle(request: &Request, grid: &Grid) -> Response {
    let response = router!(request,
        (GET) (/execute) => {
            match commands_param(request) {
                Ok(commands) => Response::json(&Rover::on(grid.clone()).execute(&commands)),
                Err(response) => response,
            }
        },
        (GET) (/grid) => {
            Response::json(&GridConfig::from(grid))
        },
        (GET) (/map) => {
            let mut rover = Rover::on(grid.clone());
            if let Some(commands) = request.get_param("commands") {
                rover.execute(&commands);
            }
            Response::text(grid.render(rover.position(), rover.heading()))
        },
        _ => Response::empty_404()
    );

    tracing::trace!(
        method = request.method(),
        url = %request.url(),
        status = response.status_code,
        "handled request"
    );
    response.with_additional_header("Access-Control-Allow-Origin", "*")
}

pub fn start_server(listen: &str, grid: Grid) -> ! {
    tracing::info!(
        listen,
        width = grid.width(),
        height = grid.height(),
        obstacles = grid.obstacles().len(),
        "starting rover server"
    );
    rouille::start_server(listen, move |request| handle(request, &grid))
}
