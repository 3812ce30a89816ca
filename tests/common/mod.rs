//! Shared test fixtures for the product dashboard integration tests.
//!
//! Provides a small sample dataset, temp-file helpers, and a one-shot local
//! HTTP responder so the HTTP load path can be exercised without the network.

#![allow(dead_code)]

use product_dashboard::Product;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use tempfile::NamedTempFile;

pub fn product(
    id: i64,
    title: &str,
    description: &str,
    price: f64,
    category: &str,
    sold: bool,
    date_of_sale: &str,
) -> Product {
    Product {
        id,
        title: title.to_string(),
        description: description.to_string(),
        price,
        category: category.to_string(),
        sold,
        date_of_sale: date_of_sale.to_string(),
        image: format!("https://img.example.com/{}.jpg", id),
    }
}

/// Eight records across four categories.
///
/// - November sales: ids 1, 6, 8 (id 8 is 30 November in its own offset)
/// - March sales: ids 3, 4, 5
/// - id 7 has an unparsable `dateOfSale`
/// - "laptop" appears in the title of id 3 and the description of id 6
pub fn sample_products() -> Vec<Product> {
    vec![
        product(
            1,
            "Fjallraven Backpack",
            "Your perfect pack for everyday use and walks in the forest.",
            329.85,
            "men's clothing",
            false,
            "2021-11-27T20:29:54+05:30",
        ),
        product(
            2,
            "Mens Casual Premium Slim Fit T-Shirts",
            "Slim-fitting style, contrast raglan long sleeve.",
            44.6,
            "men's clothing",
            false,
            "2021-10-27T20:29:54+05:30",
        ),
        product(
            3,
            "Gaming Laptop",
            "High refresh rate display and a fast GPU.",
            999.0,
            "electronics",
            true,
            "2022-03-15T10:00:00+05:30",
        ),
        product(
            4,
            "John Hardy Women's Bracelet",
            "From our Legends Collection, inspired by the mythical water dragon.",
            6950.0,
            "jewelery",
            true,
            "2021-03-27T20:29:54+05:30",
        ),
        product(
            5,
            "Solid Gold Petite Micropave",
            "Satisfaction Guaranteed. Return or exchange any order within 30 days.",
            168.0,
            "jewelery",
            false,
            "2022-03-27T20:29:54+05:30",
        ),
        product(
            6,
            "WD 2TB Elements Portable External Hard Drive",
            "USB 3.0 compatibility, fast data transfers; works with your Laptop or desktop.",
            64.0,
            "electronics",
            true,
            "2021-11-01T08:00:00Z",
        ),
        product(
            7,
            "Rain Jacket Women Windbreaker",
            "Lightweight, perfect for trips or casual wear.",
            39.99,
            "women's clothing",
            true,
            "not a date",
        ),
        product(
            8,
            "MBJ Women's Solid Short Sleeve Boat Neck V",
            "95% RAYON 5% SPANDEX, made in USA or imported.",
            100.0,
            "women's clothing",
            false,
            "2021-11-30T23:30:00-05:00",
        ),
    ]
}

pub fn ids<'a, I>(products: I) -> Vec<i64>
where
    I: IntoIterator<Item = &'a Product>,
{
    products.into_iter().map(|p| p.id).collect()
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Write `products` as a JSON array to a temp file.
pub fn write_json_file(products: &[Product]) -> NamedTempFile {
    let mut tmp = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    let body = serde_json::to_string(products).unwrap();
    tmp.write_all(body.as_bytes()).unwrap();
    tmp.flush().unwrap();
    tmp
}

/// Accept one connection on a local port, answer it with `status` and
/// `body`, and return the base URL of the responder.
pub fn serve_once(status: &'static str, body: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        }
    });

    format!("http://{}", addr)
}

/// A base URL nothing is listening on.
pub fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
