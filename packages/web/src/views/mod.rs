mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod dashboard;
pub use dashboard::Dashboard;

mod categories;
pub use categories::Categories;

mod ingredients;
pub use ingredients::Ingredients;

mod my_recipes;
pub use my_recipes::MyRecipes;

mod community;
pub use community::Community;

mod create_ai;
pub use create_ai::CreateAi;

mod recipe_detail;
pub use recipe_detail::RecipeDetail;

mod recipe_edit;
pub use recipe_edit::RecipeEdit;
