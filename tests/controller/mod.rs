mod emergency;
mod geofence;
