use anyhow::Result;
use clap::{Args, Subcommand};
use rentals::Rentals;
use rentals_sdk::{ActorContext, NewProperty, Property, ReviewDraft, ReviewView, Role};
use uuid::Uuid;

#[derive(Subcommand)]
pub enum Commands {
    /// Validate configuration and database connectivity
    Check,
    /// Apply database migrations
    Migrate,
    /// Ensure a profile exists for an identity
    Provision(ProvisionArgs),
    /// Property listings
    #[command(subcommand)]
    Properties(PropertiesCommand),
    /// Reviews and review views
    #[command(subcommand)]
    Reviews(ReviewsCommand),
}

/// Identity to act as.
#[derive(Args)]
pub struct ActorArgs {
    /// Identity id of the caller
    #[arg(long, value_name = "UUID")]
    actor: Uuid,
}

impl ActorArgs {
    fn context(&self) -> ActorContext {
        ActorContext::builder().subject_id(self.actor).build()
    }
}

#[derive(Args)]
pub struct ProvisionArgs {
    #[command(flatten)]
    actor: ActorArgs,
    /// Name recorded at sign-up
    #[arg(long)]
    name: Option<String>,
    /// Role recorded at sign-up (renter or landlord)
    #[arg(long)]
    role: Option<Role>,
    #[arg(long)]
    email: Option<String>,
}

#[derive(Subcommand)]
pub enum PropertiesCommand {
    /// List properties owned by a landlord
    List {
        #[arg(long)]
        owner: Uuid,
    },
    /// Create a property owned by the caller
    Create {
        #[command(flatten)]
        actor: ActorArgs,
        #[arg(long)]
        title: String,
        #[arg(long)]
        address: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        image_url: Option<String>,
    },
    /// Delete a property owned by the caller
    Delete {
        #[command(flatten)]
        actor: ActorArgs,
        #[arg(long)]
        id: Uuid,
    },
}

#[derive(Subcommand)]
pub enum ReviewsCommand {
    /// Review a property
    Create {
        #[command(flatten)]
        actor: ActorArgs,
        #[arg(long)]
        property: Uuid,
        #[arg(long)]
        rating: i32,
        #[arg(long)]
        text: String,
    },
    /// Reviews written by the caller
    Written {
        #[command(flatten)]
        actor: ActorArgs,
    },
    /// Reviews received across a landlord's properties
    Received {
        #[command(flatten)]
        actor: ActorArgs,
        #[arg(long)]
        landlord: Uuid,
    },
    /// Reviews of one property
    Property {
        #[command(flatten)]
        actor: ActorArgs,
        #[arg(long)]
        id: Uuid,
    },
}

pub async fn run(rentals: &Rentals, command: Commands) -> Result<()> {
    let client = rentals.client();

    match command {
        Commands::Check => {
            rentals.ping().await?;
            println!("Configuration is valid");
        }
        Commands::Migrate => {
            Rentals::migrate(rentals.db()).await?;
            println!("Migrations applied");
        }
        Commands::Provision(args) => {
            let mut builder = ActorContext::builder().subject_id(args.actor.actor);
            if let Some(name) = args.name.as_deref() {
                builder = builder.name(name);
            }
            if let Some(email) = args.email.as_deref() {
                builder = builder.email(email);
            }
            if let Some(role) = args.role {
                builder = builder.role(role);
            }
            let ctx = builder.build();
            let profile = client
                .ensure_profile(&ctx, Some(ctx.signup_defaults()))
                .await?;
            let role = profile.role.map_or("-", Role::as_str);
            println!("{} {} ({role})", profile.id, profile.display_name(ctx.email()));
        }
        Commands::Properties(cmd) => run_properties(rentals, cmd).await?,
        Commands::Reviews(cmd) => run_reviews(rentals, cmd).await?,
    }
    Ok(())
}

async fn run_properties(rentals: &Rentals, command: PropertiesCommand) -> Result<()> {
    let client = rentals.client();

    match command {
        PropertiesCommand::List { owner } => {
            let properties = client
                .list_properties_by_owner(&ActorContext::anonymous(), owner)
                .await?;
            for property in &properties {
                print_property(property);
            }
        }
        PropertiesCommand::Create {
            actor,
            title,
            address,
            description,
            image_url,
        } => {
            let property = client
                .create_property(
                    &actor.context(),
                    NewProperty {
                        title,
                        address,
                        description,
                        image_url,
                    },
                )
                .await?;
            print_property(&property);
        }
        PropertiesCommand::Delete { actor, id } => {
            client.delete_property(&actor.context(), id).await?;
            println!("Deleted {id}");
        }
    }
    Ok(())
}

async fn run_reviews(rentals: &Rentals, command: ReviewsCommand) -> Result<()> {
    let client = rentals.client();

    let views = match command {
        ReviewsCommand::Create {
            actor,
            property,
            rating,
            text,
        } => {
            let review = client
                .create_review(&actor.context(), property, ReviewDraft { rating, text })
                .await?;
            println!("{} {}/5 on {}", review.id, review.rating, review.property_id);
            return Ok(());
        }
        ReviewsCommand::Written { actor } => client.reviews_written_by(&actor.context()).await?,
        ReviewsCommand::Received { actor, landlord } => {
            client
                .reviews_received_by(&actor.context(), landlord)
                .await?
        }
        ReviewsCommand::Property { actor, id } => {
            client.reviews_for_property(&actor.context(), id).await?
        }
    };

    for view in &views {
        print_view(view);
    }
    Ok(())
}

fn print_property(property: &Property) {
    println!(
        "{}\t{}\t{}\towner={}",
        property.id, property.title, property.address, property.owner_id
    );
}

fn print_view(view: &ReviewView) {
    println!(
        "{}\t{}/5\t{}\tby {}\t{}",
        view.created_at, view.rating, view.property_title, view.reviewer_name, view.text
    );
}
