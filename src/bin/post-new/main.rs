use std::fmt::{Display, Formatter};
use std::fmt::Write as _;
use std::fs::{create_dir, File};
use std::path::PathBuf;

use chrono::{SecondsFormat, Utc};
use clap::{Parser, ValueEnum};

use frontmark::text_utils::slugify;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Name of the author. If empty, OS user real name is being used
    #[arg(short, long)]
    name: Option<String>,

    /// Title of the post
    #[arg(short, long)]
    title: Option<String>,

    /// Layout the new post will reference
    #[arg(short, long, default_value = "../layouts/PostDetails.astro")]
    layout: String,

    /// Post generation options
    #[arg(short, long, default_value_t = PostOutput::Stdout)]
    output: PostOutput,
}

#[derive(Clone, Debug, ValueEnum)]
enum PostOutput {
    /// Writes the new post content to the stdout
    Stdout,
    /// Writes the new post content to a file (posts without images)
    File,
    /// Writes the new post content to a directory (posts with images)
    Dir,
}

impl Display for PostOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PostOutput::Stdout => "stdout",
            PostOutput::File => "file",
            PostOutput::Dir => "dir",
        };
        write!(f, "{}", name)
    }
}

fn get_author(args: &Args) -> String {
    if let Some(ref name) = args.name {
        return name.clone();
    }

    let name = whoami::realname();
    if name.is_empty() {
        return whoami::username();
    }
    name
}

fn render_front_matter(layout: &str, title: Option<&str>, author: &str, date: &str) -> String {
    let mut buf = String::new();

    let _ = writeln!(&mut buf, "---");
    let _ = writeln!(&mut buf, "layout: {}", layout);
    if let Some(title) = title {
        let _ = writeln!(&mut buf, "title: {}", title);
    } else {
        let _ = writeln!(&mut buf, "title: Replace with title");
    }
    let _ = writeln!(&mut buf, "author: {}", author);
    let _ = writeln!(&mut buf, "pubDatetime: {}", date);
    let _ = writeln!(&mut buf, "draft: true");
    let _ = writeln!(&mut buf, "tags: []");
    let _ = writeln!(&mut buf, "description: Replace with description");
    let _ = writeln!(&mut buf, "---");

    buf
}

fn render_body() -> String {
    let mut buf = String::new();

    let _ = writeln!(&mut buf);
    let _ = writeln!(&mut buf, "This is a body example");
    let _ = writeln!(&mut buf, "Please remove it and replace with your content");

    buf
}

fn main() {
    let args = Args::parse();

    let author = get_author(&args);
    let date = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);

    let req_title = match args.output {
        PostOutput::Stdout => false,
        _ => true,
    };

    if req_title && args.title.is_none() {
        eprintln!("For file and dir outputs, title is required");
        return;
    }

    let front_matter = render_front_matter(&args.layout, args.title.as_deref(), &author, &date);
    let body = render_body();

    match args.output {
        PostOutput::Stdout => {
            println!("{}{}", front_matter, body);
        }
        PostOutput::File => {
            use std::io::Write;
            let file_name = format!("{}.md", slugify(args.title.unwrap().as_str()));
            println!("Creating file {}", file_name);
            let mut file = File::create(&file_name).expect("Error creating post file");
            file.write_all(front_matter.as_bytes()).expect("Error writing post file");
            file.write_all(body.as_bytes()).expect("Error writing post file");
        }
        PostOutput::Dir => {
            use std::io::Write;
            let dir_name = slugify(args.title.unwrap().as_str());
            let full_path: PathBuf = PathBuf::from(&dir_name).join("index.md");
            println!("Creating dir post {}", full_path.display());
            create_dir(&dir_name).expect("Error creating directory");
            let mut file = File::create(&full_path).expect("Error creating post file");
            file.write_all(front_matter.as_bytes()).expect("Error writing post file");
            file.write_all(body.as_bytes()).expect("Error writing post file");
        }
    };
}
