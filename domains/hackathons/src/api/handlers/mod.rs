pub mod hackathons;
