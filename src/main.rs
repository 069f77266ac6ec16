#[macro_use] extern crate rocket;
extern crate env_logger;
use rocket::{ Build, Rocket, State };
use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;
use serde_json::json;
use drink_log::api::environment::AppEnvironment;
use drink_log::api::errors::TemplateServiceError;
use drink_log::api::models::{ Drink, DrinkTemplate, DrinkTemplateInput, DrinkType, InputError, LogDrinkInput };
use drink_log::api::{ DrinkLogService, ResourceService, ResourceServiceFactory, TemplateService, TemplateServiceFactory };

type InputErrorResponse = status::Custom<Json<InputError>>;

fn input_error(status: Status, message: String) -> InputErrorResponse {
    status::Custom(status, Json(InputError { message }))
}

fn template_error(resource_service: &ResourceService, error: TemplateServiceError) -> InputErrorResponse {
    match error {
        TemplateServiceError::EmptyName => input_error(
            Status::BadRequest,
            resource_service.message("empty_template_name_error_message")
        ),
        TemplateServiceError::AlreadyExists(name) => input_error(
            Status::Conflict,
            resource_service.render_message("template_already_exists_error_message_template", &json!({ "name": name }))
        ),
        TemplateServiceError::NotFound(name) => input_error(
            Status::NotFound,
            resource_service.render_message("template_not_found_error_message_template", &json!({ "name": name }))
        )
    }
}

#[get("/drink_types")]
fn drink_types_get() -> Json<Vec<&'static str>> {
    Json(DrinkType::names().to_vec())
}

#[get("/templates")]
fn templates_get(template_service: &State<TemplateService>) -> Json<Vec<DrinkTemplate>> {
    Json(template_service.get_templates())
}

#[get("/templates/<name>")]
fn template_get(template_service: &State<TemplateService>, resource_service: &State<ResourceService>, name: &str) -> Result<Json<DrinkTemplate>, InputErrorResponse> {
    template_service.get_template(name)
        .map(Json)
        .ok_or_else(|| template_error(resource_service, TemplateServiceError::NotFound(name.to_string())))
}

#[post("/templates", data = "<template_input>")]
fn templates_post(template_service: &State<TemplateService>, resource_service: &State<ResourceService>, template_input: Json<DrinkTemplateInput>) -> Result<Json<DrinkTemplate>, InputErrorResponse> {
    template_service.create_template(template_input.into_inner().into_template())
        .map(Json)
        .map_err(|error| template_error(resource_service, error))
}

#[put("/templates/<name>", data = "<template_input>")]
fn template_put(template_service: &State<TemplateService>, resource_service: &State<ResourceService>, name: &str, template_input: Json<DrinkTemplateInput>) -> Result<Json<DrinkTemplate>, InputErrorResponse> {
    let mut template = template_input.into_inner().into_template();
    template.set_name(name);
    template_service.update_template(template)
        .map(Json)
        .map_err(|error| template_error(resource_service, error))
}

#[delete("/templates/<name>")]
fn template_delete(template_service: &State<TemplateService>, resource_service: &State<ResourceService>, name: &str) -> Result<Status, InputErrorResponse> {
    template_service.delete_template(name)
        .map(|_| Status::NoContent)
        .map_err(|error| template_error(resource_service, error))
}

#[post("/templates/<name>/drinks", data = "<log_drink_input>")]
fn template_drinks_post(
    template_service: &State<TemplateService>,
    drink_log_service: &State<DrinkLogService>,
    resource_service: &State<ResourceService>,
    name: &str,
    log_drink_input: Json<LogDrinkInput>
) -> Result<Json<Vec<Drink>>, InputErrorResponse> {
    let log_drink_input = log_drink_input.into_inner();
    let drink = template_service
        .produce_drink(name, &log_drink_input.occasion, log_drink_input.hour, log_drink_input.minute)
        .ok_or_else(|| template_error(resource_service, TemplateServiceError::NotFound(name.to_string())))?;
    let message_data = &json!({ "name": drink.name(), "time": drink.formatted_time(), "occasion": drink.occasion() });
    log::info!("{}", resource_service.render_message("drink_logged_info_message_template", message_data));
    Ok(Json(drink_log_service.put_drink(drink)))
}

#[get("/drinks")]
fn drinks_get(drink_log_service: &State<DrinkLogService>) -> Json<Vec<Drink>> {
    Json(drink_log_service.get_drinks())
}

#[delete("/drinks/<index>")]
fn drink_delete(drink_log_service: &State<DrinkLogService>, resource_service: &State<ResourceService>, index: usize) -> Result<Status, InputErrorResponse> {
    if drink_log_service.remove_drink(index) {
        Ok(Status::NoContent)
    } else {
        let message = resource_service.render_message("drink_not_found_error_message_template", &json!({ "index": index }));
        Err(input_error(Status::NotFound, message))
    }
}

fn build_rocket(template_service: TemplateService, resource_service: ResourceService) -> Rocket<Build> {
    rocket::build()
        .mount("/", routes![
            drink_types_get,
            templates_get, template_get, templates_post, template_put, template_delete,
            template_drinks_post, drinks_get, drink_delete
        ])
        .manage(template_service)
        .manage(DrinkLogService::new())
        .manage(resource_service)
}

#[launch]
fn rocket() -> _ {
    dotenv::dotenv().ok();
    env_logger::init();
    let environment = match AppEnvironment::from_env() {
        Ok(environment) => environment,
        Err(error) => panic!("Couldn't read environment: {}", error)
    };
    let resource_service = match ResourceServiceFactory::create(environment.strings_xml_file_path.as_deref()) {
        Ok(resource_service) => resource_service,
        Err(error) => panic!("Couldn't create resource service: {}", error)
    };
    let template_service = match TemplateServiceFactory::create(&environment, resource_service.clone()) {
        Ok(template_service) => template_service,
        Err(error) => panic!("Couldn't create template service: {}", error)
    };
    build_rocket(template_service, resource_service)
}
