use axum::http::StatusCode;
use maud::{DOCTYPE, Markup, html};

use crate::models::Movie;

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";
const SITE_NAME: &str = "Movie Portal";

pub fn index_page() -> String {
    page(
        SITE_NAME,
        html! {
            main class="flex-grow flex flex-col justify-center items-center text-center px-4" {
                h2 class="text-4xl font-bold mb-4" { "Welcome to the " (SITE_NAME) }
                p class="text-lg text-gray-600 mb-8" { "Browse, add and edit the movies in the catalog." }
                a class="px-6 py-3 bg-blue-600 text-white font-semibold rounded-md hover:bg-blue-700" href="/catalog" {
                    "Go to Movie List"
                }
            }
        },
    )
}

pub fn catalog_page(movies: &[Movie]) -> String {
    page(
        "Movie List",
        html! {
            main class="flex-grow max-w-4xl w-full mx-auto px-6 py-10" {
                h1 class="text-3xl font-bold mb-6 text-center" { "Movie List" }
                (movie_form("/catalog", None, "Add Movie"))

                @if movies.is_empty() {
                    p class="text-center text-gray-600" { "No movies yet." }
                } @else {
                    ul class="space-y-4" {
                        @for movie in movies {
                            (movie_item(movie))
                        }
                    }
                }
            }
        },
    )
}

pub fn edit_page(movie: &Movie) -> String {
    page(
        "Edit Movie",
        html! {
            main class="flex-grow max-w-4xl w-full mx-auto px-6 py-10" {
                a class="mb-6 inline-block px-4 py-2 bg-gray-300 rounded hover:bg-gray-400" href="/catalog" { "Back to list" }
                h1 class="text-3xl font-bold mb-6 text-center" { "Edit " (movie.title) }
                (movie_form(&movie_href(&movie.id), Some(movie), "Update Movie"))
            }
        },
    )
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    page(
        "Error",
        html! {
            main class="flex-grow flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "Error " (status.as_u16()) }
                        p class="mt-4 text-gray-700" { (message) }
                        a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/catalog" { "Back" }
                    }
                }
            }
        },
    )
}

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
            }
            body class="min-h-screen bg-white text-gray-800 flex flex-col" {
                (navbar())
                (body)
                (footer())
            }
        }
    }
    .into_string()
}

fn navbar() -> Markup {
    html! {
        nav class="bg-gray-800 text-white p-4" {
            div class="max-w-7xl mx-auto flex justify-between items-center" {
                span class="text-xl font-bold" { (SITE_NAME) }
                ul class="flex gap-4" {
                    li { a class="hover:underline" href="/" { "Home" } }
                    li { a class="hover:underline" href="/catalog" { "Movies" } }
                }
            }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer class="bg-gray-900 text-white text-center p-4 mt-8" {
            p { (SITE_NAME) }
        }
    }
}

fn movie_form(action: &str, movie: Option<&Movie>, submit: &str) -> Markup {
    let title = movie.map(|m| m.title.as_str()).unwrap_or_default();
    let year = movie.map(|m| m.release_year.to_string()).unwrap_or_default();
    let actors = movie.map(|m| m.actors.join(", ")).unwrap_or_default();

    html! {
        form class="flex flex-col sm:flex-row items-center justify-center gap-4 mb-8" method="post" action=(action) {
            input class="px-3 py-2 border border-gray-300 rounded w-full sm:w-auto" type="text" name="title" placeholder="Movie title" value=(title) required;
            input class="px-3 py-2 border border-gray-300 rounded w-full sm:w-auto" type="number" min="1" name="release_year" placeholder="Release year" value=(year) required;
            input class="px-3 py-2 border border-gray-300 rounded w-full sm:w-auto" type="text" name="actors" placeholder="Actors (comma separated)" value=(actors);
            button class="px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700" type="submit" { (submit) }
        }
    }
}

fn movie_item(movie: &Movie) -> Markup {
    let href = movie_href(&movie.id);

    html! {
        li class="px-4 py-3 border border-gray-200 shadow-sm rounded bg-gray-50 flex justify-between items-center" {
            div {
                div class="font-semibold text-lg" { (movie.title) }
                div class="text-sm text-gray-600" { "Year: " (movie.release_year) }
                div class="text-sm text-gray-600" {
                    "Actors: "
                    @if movie.actors.is_empty() { "N/A" } @else { (movie.actors.join(", ")) }
                }
            }
            div class="flex gap-2" {
                a class="px-3 py-1 bg-yellow-400 text-white rounded hover:bg-yellow-500" href=(format!("{href}/edit")) { "Edit" }
                form method="post" action=(format!("{href}/delete")) {
                    button class="px-3 py-1 bg-red-500 text-white rounded hover:bg-red-600" type="submit" { "Delete" }
                }
            }
        }
    }
}

fn movie_href(id: &str) -> String {
    format!("/catalog/{}", urlencoding::encode(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heat() -> Movie {
        Movie {
            id: "abc 1".to_string(),
            title: "Heat".to_string(),
            release_year: 1995,
            actors: vec!["Al Pacino".to_string(), "Robert De Niro".to_string()],
        }
    }

    #[test]
    fn catalog_lists_movies_with_actions() {
        let html = catalog_page(&[heat()]);
        assert!(html.contains("Heat"));
        assert!(html.contains("Year: 1995"));
        assert!(html.contains("Al Pacino, Robert De Niro"));
        assert!(html.contains(r#"action="/catalog/abc%201/delete""#));
        assert!(html.contains(r#"href="/catalog/abc%201/edit""#));
    }

    #[test]
    fn empty_catalog_says_so() {
        assert!(catalog_page(&[]).contains("No movies yet."));
    }

    #[test]
    fn edit_form_is_prefilled() {
        let html = edit_page(&heat());
        assert!(html.contains(r#"value="Al Pacino, Robert De Niro""#));
        assert!(html.contains(r#"value="1995""#));
        assert!(html.contains(r#"action="/catalog/abc%201""#));
    }

    #[test]
    fn titles_are_escaped() {
        let mut movie = heat();
        movie.title = "<script>".to_string();
        let html = catalog_page(&[movie]);
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains(r#"text-lg"><script>"#));
    }
}
