//! Fixed sample data loaded into a fresh store.

use chrono::{NaiveDate, NaiveTime};

use crate::domain::{
    Appointment, AppointmentStatus, Category, Client, Dress, RentalRecord, User, UserRole,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn dress(
    id: &str,
    name: &str,
    category: Category,
    rental_price: f64,
    images: &[&str],
    description: &str,
    available: bool,
    sizes: &[&str],
) -> Dress {
    Dress {
        id: id.to_string(),
        name: name.to_string(),
        category,
        rental_price,
        images: strings(images),
        description: description.to_string(),
        available,
        sizes: strings(sizes),
    }
}

pub fn dresses() -> Vec<Dress> {
    vec![
        dress(
            "1",
            "Vestido Noiva Clássico",
            Category::Bride,
            1500.0,
            &[
                "https://images.unsplash.com/photo-1525562723836-dca67a71d5f1?w=800",
                "https://images.unsplash.com/photo-1594552072238-82d892b7d7c4?w=800",
            ],
            "Modelo clássico com renda francesa, cauda longa e detalhes bordados à mão. Perfeito para cerimônias tradicionais.",
            true,
            &["36", "38", "40", "42"],
        ),
        dress(
            "2",
            "Vestido Noiva Minimalista",
            Category::Bride,
            1800.0,
            &[
                "https://images.unsplash.com/photo-1519741497674-611481863552?w=800",
                "https://images.unsplash.com/photo-1515934751635-c81c6bc9a2d8?w=800",
            ],
            "Design clean e moderno, em cetim nobre. Elegância atemporal para noivas contemporâneas.",
            true,
            &["36", "38", "40"],
        ),
        dress(
            "3",
            "Vestido Madrinha Rosa",
            Category::Bridesmaid,
            800.0,
            &["https://images.unsplash.com/photo-1566174053879-31528523f8ae?w=800"],
            "Vestido em tule rosa blush com aplicações delicadas. Perfeito para madrinhas elegantes.",
            true,
            &["36", "38", "40", "42", "44"],
        ),
        dress(
            "4",
            "Vestido Formatura Azul Marinho",
            Category::Graduation,
            600.0,
            &["https://images.unsplash.com/photo-1595777457583-95e059d581b8?w=800"],
            "Modelo midi em azul marinho com bordados em pedrarias. Sofisticado e moderno.",
            false,
            &["36", "38", "40"],
        ),
        dress(
            "5",
            "Vestido Debutante Princesa",
            Category::Debutante,
            1200.0,
            &["https://images.unsplash.com/photo-1566174053879-31528523f8ae?w=800"],
            "Vestido volumoso em tule com corset bordado. O sonho de toda debutante.",
            true,
            &["34", "36", "38", "40"],
        ),
        dress(
            "6",
            "Vestido Noiva Boho",
            Category::Bride,
            1600.0,
            &["https://images.unsplash.com/photo-1519657337289-077653f724ed?w=800"],
            "Estilo boho chic com renda macramê e manga longa. Ideal para casamentos ao ar livre.",
            true,
            &["36", "38", "40", "42"],
        ),
    ]
}

pub fn appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            id: "a1".to_string(),
            client_name: "Maria Silva".to_string(),
            client_id: Some("c1".to_string()),
            phone: "11 99999-0000".to_string(),
            email: Some("maria@email.com".to_string()),
            date: date(2025, 2, 15),
            time: time(14, 0),
            dress_id: "1".to_string(),
            dress_name: Some("Vestido Noiva Clássico".to_string()),
            status: AppointmentStatus::Confirmed,
            notes: Some("Primeira prova".to_string()),
        },
        Appointment {
            id: "a2".to_string(),
            client_name: "Ana Costa".to_string(),
            client_id: Some("c2".to_string()),
            phone: "11 98888-7777".to_string(),
            email: Some("ana@email.com".to_string()),
            date: date(2025, 2, 20),
            time: time(10, 0),
            dress_id: "3".to_string(),
            dress_name: Some("Vestido Madrinha Rosa".to_string()),
            status: AppointmentStatus::Pending,
            notes: None,
        },
        Appointment {
            id: "a3".to_string(),
            client_name: "Júlia Santos".to_string(),
            client_id: Some("c3".to_string()),
            phone: "11 97777-6666".to_string(),
            email: Some("julia@email.com".to_string()),
            date: date(2025, 2, 18),
            time: time(16, 0),
            dress_id: "2".to_string(),
            dress_name: Some("Vestido Noiva Minimalista".to_string()),
            status: AppointmentStatus::Confirmed,
            notes: None,
        },
    ]
}

pub fn clients() -> Vec<Client> {
    vec![
        Client {
            id: "c1".to_string(),
            name: "Maria Silva".to_string(),
            phone: "11 99999-0000".to_string(),
            email: "maria@email.com".to_string(),
            rental_history: vec![RentalRecord {
                dress_id: "1".to_string(),
                dress_name: "Vestido Noiva Clássico".to_string(),
                date: date(2024, 12, 20),
                amount: 1500.0,
            }],
            appointment_ids: strings(&["a1"]),
        },
        Client {
            id: "c2".to_string(),
            name: "Ana Costa".to_string(),
            phone: "11 98888-7777".to_string(),
            email: "ana@email.com".to_string(),
            rental_history: Vec::new(),
            appointment_ids: strings(&["a2"]),
        },
        Client {
            id: "c3".to_string(),
            name: "Júlia Santos".to_string(),
            phone: "11 97777-6666".to_string(),
            email: "julia@email.com".to_string(),
            rental_history: vec![RentalRecord {
                dress_id: "3".to_string(),
                dress_name: "Vestido Madrinha Rosa".to_string(),
                date: date(2024, 11, 15),
                amount: 800.0,
            }],
            appointment_ids: strings(&["a3"]),
        },
    ]
}

pub fn users() -> Vec<User> {
    vec![
        User {
            id: "c1".to_string(),
            name: "Maria Silva".to_string(),
            email: "cliente@memirros.com".to_string(),
            role: UserRole::Client,
        },
        User {
            id: "admin1".to_string(),
            name: "Admin Memirros".to_string(),
            email: "admin@memirros.com".to_string(),
            role: UserRole::Admin,
        },
    ]
}
