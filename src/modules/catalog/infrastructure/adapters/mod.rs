pub mod anilist;
