use bookstore_app::{
    database::{self, Db},
    domain::books::{
        BooksService, PgBooksService,
        models::{BookFilter, BookUuid, NewBook},
    },
};
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub(crate) struct DbCommand {
    #[command(subcommand)]
    command: DbSubcommand,
}

#[derive(Debug, Subcommand)]
enum DbSubcommand {
    /// Apply pending migrations.
    Migrate(ConnectionArgs),

    /// Load the sample catalog when the books table is empty.
    Seed(ConnectionArgs),
}

#[derive(Debug, Args)]
pub(crate) struct ConnectionArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(command: DbCommand) -> Result<(), String> {
    match command.command {
        DbSubcommand::Migrate(args) => migrate(args).await,
        DbSubcommand::Seed(args) => seed(args).await,
    }
}

async fn migrate(args: ConnectionArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    sqlx::migrate!("../../migrations")
        .run(&pool)
        .await
        .map_err(|error| format!("failed to run migrations: {error}"))?;

    println!("migrations applied");

    Ok(())
}

async fn seed(args: ConnectionArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let books = PgBooksService::new(Db::new(pool));

    let existing = books
        .list_books(BookFilter::default())
        .await
        .map_err(|error| format!("failed to inspect catalog: {error}"))?;

    if !existing.is_empty() {
        println!("catalog already has {} books; nothing to do", existing.len());

        return Ok(());
    }

    for book in sample_catalog() {
        let title = book.title.clone();

        books
            .create_book(book)
            .await
            .map_err(|error| format!("failed to seed '{title}': {error}"))?;

        println!("seeded: {title}");
    }

    Ok(())
}

fn sample_catalog() -> Vec<NewBook> {
    let entries: [(&str, &str, &str, &str, u64, u32); 6] = [
        (
            "The Great Gatsby",
            "F. Scott Fitzgerald",
            "Fiction",
            "A classic American novel set in the Jazz Age.",
            12_99,
            50,
        ),
        (
            "To Kill a Mockingbird",
            "Harper Lee",
            "Fiction",
            "A gripping tale of racial injustice and childhood innocence.",
            14_99,
            45,
        ),
        (
            "1984",
            "George Orwell",
            "Dystopian",
            "A dystopian social science fiction novel.",
            13_99,
            60,
        ),
        (
            "Pride and Prejudice",
            "Jane Austen",
            "Romance",
            "A romantic novel of manners written by Jane Austen.",
            11_99,
            40,
        ),
        (
            "The Catcher in the Rye",
            "J.D. Salinger",
            "Fiction",
            "A story about teenage rebellion and angst.",
            12_49,
            35,
        ),
        (
            "The Lord of the Rings",
            "J.R.R. Tolkien",
            "Fantasy",
            "An epic high-fantasy novel.",
            24_99,
            25,
        ),
    ];

    entries
        .into_iter()
        .map(
            |(title, author, category, description, price, stock)| NewBook {
                uuid: BookUuid::new(),
                title: title.to_string(),
                author: author.to_string(),
                category: category.to_string(),
                description: description.to_string(),
                price,
                stock,
            },
        )
        .collect()
}
